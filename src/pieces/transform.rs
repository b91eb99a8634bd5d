//! Orientation operations: quarter-turn rotations and the horizontal mirror.
//!
//! Both act on offsets relative to a placement's reference point. Rotation
//! by a multiple of 90 degrees uses the exact integer values of cos/sin, so
//! every image stays on the lattice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Cell;

/// Rejected transform arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("unsupported rotation: {0} degrees (expected 0, 90, 180 or 270)")]
    Rotation(u16),
    #[error("unsupported mirror flag: {0} (expected 0 or 1)")]
    Mirror(u8),
}

/// Clockwise rotation about the reference point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Number of quarter turns (0..4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        self as u16 * 90
    }

    /// Quarter-turn count back to a rotation. `None` for 4 and above.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rotation::R0),
            1 => Some(Rotation::R90),
            2 => Some(Rotation::R180),
            3 => Some(Rotation::R270),
            _ => None,
        }
    }

    /// Parse a clockwise angle in degrees.
    pub fn from_degrees(degrees: u16) -> Result<Self, TransformError> {
        if degrees % 90 != 0 {
            return Err(TransformError::Rotation(degrees));
        }
        u8::try_from(degrees / 90)
            .ok()
            .and_then(Self::from_index)
            .ok_or(TransformError::Rotation(degrees))
    }

    /// `(cos, sin)` of the angle.
    const fn cos_sin(self) -> (i16, i16) {
        match self {
            Rotation::R0 => (1, 0),
            Rotation::R90 => (0, 1),
            Rotation::R180 => (-1, 0),
            Rotation::R270 => (0, -1),
        }
    }

    /// Rotate an offset clockwise: `(dx, dy) -> (dx·cos + dy·sin, -dx·sin + dy·cos)`.
    #[inline]
    #[must_use]
    pub const fn apply(self, offset: Cell) -> Cell {
        let (cos, sin) = self.cos_sin();
        Cell::new(
            offset.x * cos + offset.y * sin,
            -offset.x * sin + offset.y * cos,
        )
    }
}

/// Reflection applied before rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mirror {
    Identity,
    /// Reflect across the reference point's column (negates `x` offsets).
    Horizontal,
}

impl Mirror {
    /// 0 for identity, 1 for horizontal. This is the bit the action encoding uses.
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub fn from_bit(bit: u8) -> Result<Self, TransformError> {
        match bit {
            0 => Ok(Mirror::Identity),
            1 => Ok(Mirror::Horizontal),
            other => Err(TransformError::Mirror(other)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn apply(self, offset: Cell) -> Cell {
        match self {
            Mirror::Identity => offset,
            Mirror::Horizontal => Cell::new(-offset.x, offset.y),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = TransformError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

impl TryFrom<u8> for Mirror {
    type Error = TransformError;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        Self::from_bit(bit)
    }
}
