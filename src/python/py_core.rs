//! Conversions at the Python boundary.
//!
//! Python callers address players by sign (`1` first, `-1` second) and
//! actions by plain integers.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::codec::Placement;
use crate::core::{ActionId, PlayerId, ACTION_SPACE};

/// Player for a sign label.
pub(crate) fn player_from_sign(sign: i8) -> PyResult<PlayerId> {
    PlayerId::from_label(sign)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 or -1, got {}", sign)))
}

/// Action id from a Python integer.
pub(crate) fn action_from_int(raw: usize) -> PyResult<ActionId> {
    ActionId::new(raw).ok_or_else(|| {
        PyValueError::new_err(format!("action {} is outside 0..{}", raw, ACTION_SPACE))
    })
}

/// Placement as a dict: `action`, `shape`, `reference`, `rotation`, `mirrored`, `cells`.
pub(crate) fn placement_to_dict<'py>(
    py: Python<'py>,
    placement: &Placement,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    let spec = &placement.spec;
    dict.set_item("action", placement.action.index())?;
    dict.set_item("shape", spec.shape.name())?;
    dict.set_item("reference", (spec.reference.x, spec.reference.y))?;
    dict.set_item("rotation", spec.rotation.degrees())?;
    dict.set_item("mirrored", spec.mirror.bit() == 1)?;
    let cells: Vec<(i16, i16)> = placement.cells.iter().map(|c| (c.x, c.y)).collect();
    dict.set_item("cells", cells)?;
    Ok(dict)
}
