//! Rules: the placement legality predicate and the engine trait.
//!
//! `is_legal` is pure and knows nothing about enumeration or encoding.
//! Games implement `RulesEngine` on top of it to define:
//! - Available actions for each state
//! - How actions modify state
//! - Win/loss conditions

pub mod engine;
pub mod legality;

pub use engine::{GameResult, RulesEngine};
pub use legality::is_legal;
