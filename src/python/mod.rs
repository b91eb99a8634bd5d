//! Python bindings for the Blokus Duo rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import blokus_duo
//!
//! game = blokus_duo.BlokusGame()
//! mask = game.get_valid_moves(1)
//! game.play_action(int(mask.nonzero()[0][0]))
//!
//! over, result = game.check_game_over(1)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_games::*;

/// blokus_duo: Blokus Duo rules engine for search and self-play.
#[pymodule]
fn blokus_duo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBlokusGame>()?;
    m.add("ACTION_SPACE", crate::core::ACTION_SPACE)?;
    m.add("BOARD_SIZE", crate::core::BOARD_SIZE)?;
    Ok(())
}
