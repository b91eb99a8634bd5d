//! The 21 Blokus shapes.
//!
//! Shapes are data, not types: each [`ShapeDef`] lists its cells and
//! corner-candidate cells as offsets from the reference cell (always the
//! first listed cell, at `(0, 0)`), the mirrors and rotations that yield
//! distinct placements, and the encoding base (`shift`) that gives the
//! shape its own run of orientation slots within a board position.
//!
//! The table is ordered by ascending `shift`, which is also the order in
//! which move enumeration tries shapes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::transform::{Mirror, Rotation};
use crate::core::Cell;

macro_rules! offsets {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        &[$(Cell { x: $x, y: $y }),*]
    };
}

const BOTH_MIRRORS: &[Mirror] = &[Mirror::Identity, Mirror::Horizontal];
const NO_MIRROR: &[Mirror] = &[Mirror::Identity];
const ALL_ROTATIONS: &[Rotation] = &[Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];
const HALF_ROTATIONS: &[Rotation] = &[Rotation::R0, Rotation::R90];
const NO_ROTATION: &[Rotation] = &[Rotation::R0];

/// Catalog identifier. Discriminants index [`CATALOG`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShapeId {
    N,
    L5,
    Y,
    P,
    F,
    L4,
    T4,
    V5,
    T5,
    U,
    Z5,
    Z4,
    W,
    V3,
    I5,
    I4,
    I3,
    I2,
    X,
    O4,
    I1,
}

impl ShapeId {
    /// Number of shapes in the catalog.
    pub const COUNT: usize = 21;

    /// Every shape in catalog order.
    pub const ALL: [ShapeId; ShapeId::COUNT] = [
        ShapeId::N,
        ShapeId::L5,
        ShapeId::Y,
        ShapeId::P,
        ShapeId::F,
        ShapeId::L4,
        ShapeId::T4,
        ShapeId::V5,
        ShapeId::T5,
        ShapeId::U,
        ShapeId::Z5,
        ShapeId::Z4,
        ShapeId::W,
        ShapeId::V3,
        ShapeId::I5,
        ShapeId::I4,
        ShapeId::I3,
        ShapeId::I2,
        ShapeId::X,
        ShapeId::O4,
        ShapeId::I1,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The catalog entry for this shape.
    #[must_use]
    pub fn def(self) -> &'static ShapeDef {
        &CATALOG[self.index()]
    }

    /// Short name, e.g. `"L5"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShapeId::N => "N",
            ShapeId::L5 => "L5",
            ShapeId::Y => "Y",
            ShapeId::P => "P",
            ShapeId::F => "F",
            ShapeId::L4 => "L4",
            ShapeId::T4 => "T4",
            ShapeId::V5 => "V5",
            ShapeId::T5 => "T5",
            ShapeId::U => "U",
            ShapeId::Z5 => "Z5",
            ShapeId::Z4 => "Z4",
            ShapeId::W => "W",
            ShapeId::V3 => "V3",
            ShapeId::I5 => "I5",
            ShapeId::I4 => "I4",
            ShapeId::I3 => "I3",
            ShapeId::I2 => "I2",
            ShapeId::X => "X",
            ShapeId::O4 => "O4",
            ShapeId::I1 => "I1",
        }
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown shape name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shape name: {0:?}")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeId {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// How the orientation offset is laid out inside a shape's slot run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetryClass {
    /// Mirror and rotation both vary: offset = rotation·2 + mirror.
    Full,
    /// Rotation varies, mirror does not (the straight pieces): offset = rotation + mirror.
    Axial,
    /// A single orientation: offset = 0.
    Symmetric,
}

impl SymmetryClass {
    /// Slots between consecutive rotations.
    #[must_use]
    pub const fn stride(self) -> u8 {
        match self {
            SymmetryClass::Full => 2,
            SymmetryClass::Axial => 1,
            SymmetryClass::Symmetric => 0,
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug)]
pub struct ShapeDef {
    pub id: ShapeId,
    /// Occupied offsets; the first is the reference cell `(0, 0)`.
    pub cells: &'static [Cell],
    /// Diagonal-touch candidates around the shape.
    pub corners: &'static [Cell],
    pub mirrors: &'static [Mirror],
    pub rotations: &'static [Rotation],
    /// First orientation slot of this shape within a position's 91 slots.
    pub shift: u8,
}

impl ShapeDef {
    /// Number of cells, i.e. the points scored for placing it.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn symmetry(&self) -> SymmetryClass {
        if self.mirrors.len() > 1 {
            SymmetryClass::Full
        } else if self.rotations.len() > 1 {
            SymmetryClass::Axial
        } else {
            SymmetryClass::Symmetric
        }
    }

    /// Distinct orientations this shape can be placed in.
    #[must_use]
    pub fn slot_count(&self) -> u8 {
        (self.mirrors.len() * self.rotations.len()) as u8
    }

    #[must_use]
    pub fn permits(&self, rotation: Rotation, mirror: Mirror) -> bool {
        self.rotations.contains(&rotation) && self.mirrors.contains(&mirror)
    }

    /// Offset of `(rotation, mirror)` inside this shape's slot run.
    #[must_use]
    pub fn orientation_offset(&self, rotation: Rotation, mirror: Mirror) -> u8 {
        rotation.index() * self.symmetry().stride() + mirror.bit()
    }

    /// Every permitted `(mirror, rotation)` pair in enumeration order.
    pub fn orientations(&self) -> impl Iterator<Item = (Mirror, Rotation)> + '_ {
        self.mirrors
            .iter()
            .flat_map(move |&m| self.rotations.iter().map(move |&r| (m, r)))
    }
}

/// The shape table, indexed by `ShapeId` discriminant.
pub static CATALOG: [ShapeDef; ShapeId::COUNT] = [
    ShapeDef {
        id: ShapeId::N,
        cells: offsets![(0, 0), (1, 0), (2, 0), (0, -1), (-1, -1)],
        corners: offsets![(1, -2), (3, -1), (3, 1), (-1, 1), (-2, 0), (-2, -2)],
        mirrors: BOTH_MIRRORS,
        rotations: ALL_ROTATIONS,
        shift: 0,
    },
    ShapeDef {
        id: ShapeId::L5,
        cells: offsets![(0, 0), (0, 1), (1, 0), (2, 0), (3, 0)],
        corners: offsets![(-1, -1), (4, -1), (4, 1), (1, 2), (-1, 2)],
        mirrors: BOTH_MIRRORS,
        rotations: ALL_ROTATIONS,
        shift: 8,
    },
    ShapeDef {
        id: ShapeId::Y,
        cells: offsets![(0, 0), (0, 1), (1, 0), (2, 0), (-1, 0)],
        corners: offsets![(3, -1), (3, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1)],
        mirrors: BOTH_MIRRORS,
        rotations: ALL_ROTATIONS,
        shift: 16,
    },
    ShapeDef {
        id: ShapeId::P,
        cells: offsets![(0, 0), (1, 0), (1, -1), (0, -1), (0, -2)],
        corners: offsets![(1, -3), (2, -2), (2, 1), (-1, 1), (-1, -3)],
        mirrors: BOTH_MIRRORS,
        rotations: ALL_ROTATIONS,
        shift: 24,
    },
    ShapeDef {
        id: ShapeId::F,
        cells: offsets![(0, 0), (0, 1), (1, 1), (0, -1), (-1, 0)],
        corners: offsets![(1, -2), (2, 0), (2, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2)],
        mirrors: BOTH_MIRRORS,
        rotations: ALL_ROTATIONS,
        shift: 32,
    },
    ShapeDef {
        id: ShapeId::L4,
        cells: offsets![(0, 0), (0, 1), (0, 2), (1, 0)],
        corners: offsets![(-1, -1), (2, -1), (2, 1), (1, 3), (-1, 3)],
        mirrors: BOTH_MIRRORS,
        rotations: ALL_ROTATIONS,
        shift: 40,
    },
    ShapeDef {
        id: ShapeId::T4,
        cells: offsets![(0, 0), (0, 1), (1, 0), (-1, 0)],
        corners: offsets![(2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 48,
    },
    ShapeDef {
        id: ShapeId::V5,
        cells: offsets![(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)],
        corners: offsets![(-1, -1), (3, -1), (3, 1), (1, 3), (-1, 3)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 52,
    },
    ShapeDef {
        id: ShapeId::T5,
        cells: offsets![(0, 0), (0, 1), (0, 2), (-1, 0), (1, 0)],
        corners: offsets![(2, -1), (2, 1), (1, 3), (-1, 3), (-2, 1), (-2, -1)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 56,
    },
    ShapeDef {
        id: ShapeId::U,
        cells: offsets![(0, 0), (0, 1), (1, 1), (0, -1), (1, -1)],
        corners: offsets![(2, -2), (2, 0), (2, 2), (-1, 2), (-1, -2)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 60,
    },
    ShapeDef {
        id: ShapeId::Z5,
        cells: offsets![(0, 0), (1, 0), (1, 1), (-1, 0), (-1, -1)],
        corners: offsets![(2, -1), (2, 2), (0, 2), (-2, 1), (-2, -2), (0, -2)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 64,
    },
    ShapeDef {
        id: ShapeId::Z4,
        cells: offsets![(0, 0), (0, 1), (1, 1), (-1, 0)],
        corners: offsets![(-2, -1), (1, -1), (2, 0), (2, 2), (-1, 2), (-2, 1)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 68,
    },
    ShapeDef {
        id: ShapeId::W,
        cells: offsets![(0, 0), (0, 1), (1, 1), (-1, 0), (-1, -1)],
        corners: offsets![(1, -1), (2, 0), (2, 2), (-1, 2), (-2, 1), (-2, -2), (0, -2)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 72,
    },
    ShapeDef {
        id: ShapeId::V3,
        cells: offsets![(0, 0), (0, 1), (1, 0)],
        corners: offsets![(-1, -1), (2, -1), (2, 1), (1, 2), (-1, 2)],
        mirrors: BOTH_MIRRORS,
        rotations: HALF_ROTATIONS,
        shift: 76,
    },
    ShapeDef {
        id: ShapeId::I5,
        cells: offsets![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
        corners: offsets![(-1, -1), (1, -1), (1, 5), (-1, 5)],
        mirrors: NO_MIRROR,
        rotations: HALF_ROTATIONS,
        shift: 80,
    },
    ShapeDef {
        id: ShapeId::I4,
        cells: offsets![(0, 0), (0, 1), (0, 2), (0, 3)],
        corners: offsets![(-1, -1), (1, -1), (1, 4), (-1, 4)],
        mirrors: NO_MIRROR,
        rotations: HALF_ROTATIONS,
        shift: 82,
    },
    ShapeDef {
        id: ShapeId::I3,
        cells: offsets![(0, 0), (0, 1), (0, 2)],
        corners: offsets![(-1, -1), (1, -1), (1, 3), (-1, 3)],
        mirrors: NO_MIRROR,
        rotations: HALF_ROTATIONS,
        shift: 84,
    },
    ShapeDef {
        id: ShapeId::I2,
        cells: offsets![(0, 0), (0, 1)],
        corners: offsets![(-1, -1), (1, -1), (1, 2), (-1, 2)],
        mirrors: NO_MIRROR,
        rotations: HALF_ROTATIONS,
        shift: 86,
    },
    ShapeDef {
        id: ShapeId::X,
        cells: offsets![(0, 0), (0, 1), (1, 0), (0, -1), (-1, 0)],
        corners: offsets![(1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2)],
        mirrors: NO_MIRROR,
        rotations: NO_ROTATION,
        shift: 88,
    },
    ShapeDef {
        id: ShapeId::O4,
        cells: offsets![(0, 0), (0, 1), (1, 1), (1, 0)],
        corners: offsets![(-1, -1), (2, -1), (2, 2), (-1, 2)],
        mirrors: NO_MIRROR,
        rotations: NO_ROTATION,
        shift: 89,
    },
    ShapeDef {
        id: ShapeId::I1,
        cells: offsets![(0, 0)],
        corners: offsets![(1, 1), (-1, -1), (1, -1), (-1, 1)],
        mirrors: NO_MIRROR,
        rotations: NO_ROTATION,
        shift: 90,
    },
];

/// Sum of all shape sizes: the most cells one player can cover.
pub const TOTAL_CELLS_PER_PLAYER: u32 = 89;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_ids() {
        for (index, def) in CATALOG.iter().enumerate() {
            assert_eq!(def.id.index(), index);
            assert_eq!(def.id.def().id, def.id);
        }
    }

    #[test]
    fn test_size_distribution() {
        let mut by_size = [0usize; 6];
        for def in &CATALOG {
            by_size[def.size()] += 1;
        }
        assert_eq!(by_size, [0, 1, 1, 2, 5, 12]);

        let total: usize = CATALOG.iter().map(ShapeDef::size).sum();
        assert_eq!(total as u32, TOTAL_CELLS_PER_PLAYER);
    }

    #[test]
    fn test_reference_cell_is_origin() {
        for def in &CATALOG {
            assert_eq!(def.cells[0], Cell::new(0, 0), "{}", def.id);
        }
    }

    #[test]
    fn test_corners_touch_diagonally_only() {
        for def in &CATALOG {
            for &corner in def.corners {
                assert!(!def.cells.contains(&corner), "{} corner {} overlaps", def.id, corner);
                let diagonal = def.cells.iter().any(|&c| {
                    let d = corner - c;
                    d.x.abs() == 1 && d.y.abs() == 1
                });
                assert!(diagonal, "{} corner {} touches nothing", def.id, corner);
            }
        }
    }

    #[test]
    fn test_slot_runs_tile_position_space() {
        let mut next = 0u8;
        for def in &CATALOG {
            assert_eq!(def.shift, next, "{} should start where the previous run ends", def.id);
            next += def.slot_count();
        }
        assert_eq!(next, 91);
    }

    #[test]
    fn test_symmetry_classes() {
        assert_eq!(ShapeId::N.def().symmetry(), SymmetryClass::Full);
        assert_eq!(ShapeId::V3.def().symmetry(), SymmetryClass::Full);
        for id in [ShapeId::I5, ShapeId::I4, ShapeId::I3, ShapeId::I2] {
            assert_eq!(id.def().symmetry(), SymmetryClass::Axial);
        }
        for id in [ShapeId::X, ShapeId::O4, ShapeId::I1] {
            assert_eq!(id.def().symmetry(), SymmetryClass::Symmetric);
        }
    }

    #[test]
    fn test_orientation_offsets_stay_in_run() {
        for def in &CATALOG {
            let mut offsets: Vec<u8> = def
                .orientations()
                .map(|(m, r)| def.orientation_offset(r, m))
                .collect();
            offsets.sort_unstable();
            let expected: Vec<u8> = (0..def.slot_count()).collect();
            assert_eq!(offsets, expected, "{}", def.id);
        }
    }

    #[test]
    fn test_names_parse() {
        for id in ShapeId::ALL {
            assert_eq!(id.name().parse::<ShapeId>(), Ok(id));
        }
        assert_eq!(" l5 ".parse::<ShapeId>(), Ok(ShapeId::L5));
        assert!("Q".parse::<ShapeId>().is_err());
    }
}
