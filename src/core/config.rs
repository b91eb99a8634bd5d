//! Game configuration.
//!
//! A game is configured once at construction:
//! - starting corner per player (the cell each opening placement must cover)
//! - deny-list of action ids that are never reported available
//!
//! Board size and action-space layout are compile-time constants; the
//! encoding is only defined for the 14x14 board.

use std::sync::Arc;

use super::coord::{Cell, BOARD_SIZE};
use super::player::{PlayerId, PlayerMap};
use crate::codec::DenyList;

/// Default opening anchor for the first player.
pub const FIRST_START_CORNER: Cell = Cell::new(4, 4);

/// Default opening anchor for the second player.
pub const SECOND_START_CORNER: Cell = Cell::new(BOARD_SIZE - 5, BOARD_SIZE - 5);

/// Complete game configuration.
///
/// Cloning shares the deny-list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Cell each player's opening placement must cover.
    pub start_corners: PlayerMap<Cell>,

    /// Ids forced unavailable in every availability mask.
    pub deny_list: Arc<DenyList>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_corners: PlayerMap::new(|p| {
                if p == PlayerId::FIRST {
                    FIRST_START_CORNER
                } else {
                    SECOND_START_CORNER
                }
            }),
            deny_list: Arc::new(DenyList::new()),
        }
    }
}

impl GameConfig {
    /// Standard Blokus Duo configuration with an empty deny-list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a player's starting corner.
    ///
    /// Panics if the cell is off the board.
    #[must_use]
    pub fn with_start_corner(mut self, player: PlayerId, corner: Cell) -> Self {
        assert!(corner.in_bounds(), "starting corner {} is off the board", corner);
        self.start_corners[player] = corner;
        self
    }

    /// Replace the deny-list.
    #[must_use]
    pub fn with_deny_list(mut self, deny_list: DenyList) -> Self {
        self.deny_list = Arc::new(deny_list);
        self
    }

    /// Starting corner for a player.
    #[must_use]
    pub fn start_corner(&self, player: PlayerId) -> Cell {
        self.start_corners[player]
    }
}
