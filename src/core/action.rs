//! Action space: integer action ids and availability masks.
//!
//! Every placement on the 14x14 board maps to one id in
//! `[0, ACTION_SPACE)`: `position * ORIENTATION_SLOTS + slot`, where
//! `position = x * 14 + y` of the reference point and `slot` picks shape
//! and orientation. See [`crate::codec`] for the mapping itself.

use serde::{Deserialize, Serialize};

use super::coord::CELL_COUNT;

/// Orientation slots per board position (sum of every shape's orientations).
pub const ORIENTATION_SLOTS: usize = 91;

/// Reference-point positions (one per board cell).
pub const POSITION_COUNT: usize = CELL_COUNT;

/// Size of the action space.
pub const ACTION_SPACE: usize = POSITION_COUNT * ORIENTATION_SLOTS;

/// Index into the action space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u16);

impl ActionId {
    /// Create an action id. Returns `None` outside `[0, ACTION_SPACE)`.
    #[must_use]
    pub fn new(raw: usize) -> Option<Self> {
        (raw < ACTION_SPACE).then(|| Self(raw as u16))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Reference-point position (`x * 14 + y`).
    #[must_use]
    pub const fn position(self) -> usize {
        self.index() / ORIENTATION_SLOTS
    }

    /// Orientation slot within the position, in `[0, 91)`.
    #[must_use]
    pub const fn slot(self) -> u8 {
        (self.index() % ORIENTATION_SLOTS) as u8
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action({})", self.0)
    }
}

/// Availability vector over the whole action space.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionMask {
    bits: Vec<bool>,
}

impl ActionMask {
    /// All actions unavailable.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bits: vec![false; ACTION_SPACE],
        }
    }

    pub fn set(&mut self, action: ActionId) {
        self.bits[action.index()] = true;
    }

    pub fn clear(&mut self, action: ActionId) {
        self.bits[action.index()] = false;
    }

    #[must_use]
    pub fn contains(&self, action: ActionId) -> bool {
        self.bits[action.index()]
    }

    /// Number of available actions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True when no action is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Available ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| ActionId(i as u16))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// `0`/`1` vector, the layout policy heads consume.
    #[must_use]
    pub fn to_i8(&self) -> Vec<i8> {
        self.bits.iter().map(|&b| i8::from(b)).collect()
    }
}

impl std::fmt::Debug for ActionMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionMask")
            .field("available", &self.count())
            .finish()
    }
}
