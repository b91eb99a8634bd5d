//! Mapping between action ids and concrete placements.
//!
//! ## Layout
//!
//! ```text
//! id   = position * 91 + shape.shift + orientation_offset
//! position = x * 14 + y              (reference point)
//! orientation_offset =
//!     rotation * 2 + mirror          full repertoire (mirror and rotation vary)
//!     rotation + mirror              straight pieces I2..I5
//!     0                              X, O4, I1
//! ```
//!
//! Decoding finds the shape whose `shift` is the largest one not above
//! `id % 91`, then inverts the offset. A slot whose inverted orientation
//! the shape does not permit decodes to the shape's first orientation;
//! enumeration never emits such ids, but decoding stays total.

pub mod deny_list;

pub use deny_list::{DenyList, DenyListError};

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, Cell, ACTION_SPACE, BOARD_SIZE, ORIENTATION_SLOTS};
use crate::pieces::{Mirror, Rotation, ShapeDef, ShapeId, ShapeInstance, SymmetryClass, CATALOG};

/// Shape, reference point and orientation of a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementSpec {
    pub shape: ShapeId,
    pub reference: Cell,
    pub mirror: Mirror,
    pub rotation: Rotation,
}

impl PlacementSpec {
    /// Build the concrete instance.
    ///
    /// Panics if the orientation is not permitted for the shape.
    #[must_use]
    pub fn instance(&self) -> ShapeInstance {
        ShapeInstance::new(self.shape, self.reference, self.mirror, self.rotation)
    }
}

/// A decoded action with its geometry, for callers that render or replay moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub action: ActionId,
    pub spec: PlacementSpec,
    pub cells: Vec<Cell>,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} rot {} {}",
            self.spec.shape,
            self.spec.reference,
            self.spec.rotation.degrees(),
            if self.spec.mirror == Mirror::Horizontal { "mirrored" } else { "plain" }
        )
    }
}

/// Encode a placement.
///
/// Panics if the reference point is off the board; every enumerated
/// reference point is an available corner, which is always on the board.
#[must_use]
pub fn encode(shape: ShapeId, reference: Cell, rotation: Rotation, mirror: Mirror) -> ActionId {
    let position = reference
        .index()
        .unwrap_or_else(|| panic!("reference point {} is off the board", reference));
    let def = shape.def();
    let raw = position * ORIENTATION_SLOTS
        + def.shift as usize
        + def.orientation_offset(rotation, mirror) as usize;
    debug_assert!(raw < ACTION_SPACE);
    ActionId(raw as u16)
}

/// Encode an instance by its shape, reference point and orientation.
#[must_use]
pub fn encode_instance(instance: &ShapeInstance) -> ActionId {
    encode(instance.shape(), instance.reference(), instance.rotation(), instance.mirror())
}

/// Shape owning orientation slot `slot` (in `[0, 91)`).
fn shape_for_slot(slot: u8) -> &'static ShapeDef {
    let after = CATALOG.partition_point(|def| def.shift <= slot);
    &CATALOG[after.saturating_sub(1)]
}

/// Invert the orientation offset, falling back to the first orientation.
fn orientation_for_offset(def: &ShapeDef, offset: u8) -> (Rotation, Mirror) {
    let (rotation, mirror) = match def.symmetry() {
        SymmetryClass::Full => (Rotation::from_index(offset / 2), Mirror::from_bit(offset % 2).ok()),
        SymmetryClass::Axial => (Rotation::from_index(offset), Some(Mirror::Identity)),
        SymmetryClass::Symmetric => (Some(Rotation::R0), Some(Mirror::Identity)),
    };
    match (rotation, mirror) {
        (Some(r), Some(m)) if offset < def.slot_count() && def.permits(r, m) => (r, m),
        _ => (def.rotations[0], def.mirrors[0]),
    }
}

/// Decode an action id.
#[must_use]
pub fn decode(action: ActionId) -> PlacementSpec {
    debug_assert!(action.index() < ACTION_SPACE);
    let position = action.position();
    let slot = action.slot();
    let def = shape_for_slot(slot);
    let (rotation, mirror) = orientation_for_offset(def, slot - def.shift);
    PlacementSpec {
        shape: def.id,
        reference: Cell::new(
            (position / BOARD_SIZE as usize) as i16,
            (position % BOARD_SIZE as usize) as i16,
        ),
        mirror,
        rotation,
    }
}

/// Decode an action id and build its geometry.
#[must_use]
pub fn translate(action: ActionId) -> Placement {
    let spec = decode(action);
    Placement {
        action,
        spec,
        cells: spec.instance().cells().to_vec(),
    }
}
