//! Game implementations.

pub mod blokus;
