//! # blokus-duo
//!
//! Rules engine for Blokus Duo, built for search and self-play training.
//!
//! ## Design Principles
//!
//! 1. **Shapes Are Data**: The 21 pieces are one table of cell offsets,
//!    corner offsets and permitted orientations, consumed by a single
//!    generic transform routine.
//!
//! 2. **Dense Action Space**: Every placement maps to one id in
//!    `[0, 17836)`; availability is a fixed-length mask that policy heads
//!    consume directly.
//!
//! 3. **Configuration Over Globals**: Starting corners and the deny-list
//!    live in `GameConfig`, so games are independently constructible.
//!
//! ## Architecture
//!
//! - **Value Semantics**: Games clone cheaply (`im` sets for corners and
//!   inventories), so a search can copy a game per node or per worker
//!   without sharing mutable state.
//!
//! - **Deterministic**: Given the starting corners, deny-list and action
//!   sequence, every state and every mask is reproducible.
//!
//! ## Modules
//!
//! - `core`: Players, cells, configuration, action ids, board state, RNG
//! - `pieces`: Shape catalog, rotations and mirrors, concrete placements
//! - `codec`: Action id encoding and decoding, deny-list
//! - `rules`: Legality predicate and the `RulesEngine` trait
//! - `games`: The Blokus Duo controller and random playouts

pub mod core;
pub mod pieces;
pub mod codec;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Cell, BOARD_SIZE,
    GameRng, GameConfig,
    ActionId, ActionMask, ACTION_SPACE,
    BoardState,
};

pub use crate::pieces::{Mirror, Rotation, ShapeDef, ShapeId, ShapeInstance, TransformError, CATALOG};

pub use crate::codec::{decode, encode, translate, DenyList, DenyListError, Placement, PlacementSpec};

pub use crate::rules::{is_legal, GameResult, RulesEngine};

pub use crate::games::blokus::{
    play_random_game, BlokusGame, BlokusGameBuilder, PlacementError, PlayoutSummary,
};
