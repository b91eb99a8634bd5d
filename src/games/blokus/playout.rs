//! Uniformly random playouts.
//!
//! Used to reach arbitrary positions in tests and benchmarks. No move is
//! ever evaluated; the driver only picks among available ids.

use serde::{Deserialize, Serialize};

use super::game::BlokusGame;
use crate::core::{ActionId, GameRng};
use crate::rules::GameResult;

/// What happened during one playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// Placed action ids, in order.
    pub actions: Vec<ActionId>,
    /// Turns handed over because the player to move had no available id.
    pub passes: usize,
    /// `None` if `max_plies` ran out first.
    pub result: Option<GameResult>,
}

impl PlayoutSummary {
    /// Placements made.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.actions.len()
    }
}

/// Play random available moves until neither player can move, or until
/// `max_plies` placements have been made.
///
/// A player with no available id passes while the opponent still has one.
pub fn play_random_game(game: &mut BlokusGame, rng: &mut GameRng, max_plies: usize) -> PlayoutSummary {
    let mut actions = Vec::new();
    let mut passes = 0;

    while actions.len() < max_plies {
        let player = game.current_player();
        let available = game.legal_actions(player);
        match rng.choose(&available) {
            Some(&action) => {
                game.play_action(action);
                actions.push(action);
            }
            None if game.has_valid_move(player.opponent()) => {
                game.pass_turn();
                passes += 1;
            }
            None => break,
        }
    }

    PlayoutSummary {
        actions,
        passes,
        result: game.result(),
    }
}
