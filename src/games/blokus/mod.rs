//! Blokus Duo.
//!
//! Two players on a 14x14 board, 21 polyominoes each:
//! - Each player's first piece must cover their starting corner
//! - Later pieces must touch the player's own pieces at a corner and never
//!   along an edge
//! - The game ends when neither player can place anything
//! - The player covering more cells wins; equal coverage is a draw

mod game;
mod moves;
mod playout;

pub use game::{BlokusGame, BlokusGameBuilder, PlacementError};
pub use playout::{play_random_game, PlayoutSummary};
