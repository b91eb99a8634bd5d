//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which action ids are available
//! - How an action modifies state
//! - When the game ends and who won

use serde::{Deserialize, Serialize};

use crate::core::{ActionId, ActionMask, BoardState, GameConfig, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Outcome from `player`'s point of view: `+1` win, `-1` loss, `0` draw.
    #[must_use]
    pub fn value_for(&self, player: PlayerId) -> i8 {
        match self {
            GameResult::Winner(p) if *p == player => 1,
            GameResult::Winner(_) => -1,
            GameResult::Draw => 0,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `valid_moves`: full-length mask; empty when the player cannot move
/// - `apply_action`: trusts that the id came from `valid_moves`
/// - `is_terminal`: `None` while either player can still move
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Availability mask of `player`'s moves over the whole action space.
    fn valid_moves(&self, state: &BoardState, player: PlayerId) -> ActionMask;

    /// Apply an action for the player to move.
    ///
    /// Must be deterministic.
    fn apply_action(&self, state: &mut BoardState, action: ActionId);

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &BoardState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Available ids for a player, ascending.
    fn legal_actions(&self, state: &BoardState, player: PlayerId) -> Vec<ActionId> {
        self.valid_moves(state, player).iter().collect()
    }

    /// Whether the player has at least one available id.
    ///
    /// Implementations may stop at the first hit.
    fn has_valid_move(&self, state: &BoardState, player: PlayerId) -> bool {
        !self.valid_moves(state, player).is_empty()
    }
}
