//! Core engine types: players, board coordinates, configuration, actions,
//! state and RNG.
//!
//! Nothing here knows piece geometry beyond what `BoardState::place` needs
//! to stamp a placement; legality lives in `rules`.

pub mod player;
pub mod coord;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use coord::{Cell, BOARD_SIZE, CELL_COUNT, CORNER_STEPS, EDGE_STEPS};
pub use rng::GameRng;
pub use config::{GameConfig, FIRST_START_CORNER, SECOND_START_CORNER};
pub use action::{ActionId, ActionMask, ACTION_SPACE, ORIENTATION_SLOTS, POSITION_COUNT};
pub use state::BoardState;
