//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Cell, BOARD_SIZE};
use crate::games::blokus::{BlokusGame, BlokusGameBuilder};

use super::py_core::{action_from_int, placement_to_dict, player_from_sign};

/// Python wrapper for BlokusGame.
///
/// Players are `1` (moves first) and `-1`.
#[pyclass(name = "BlokusGame")]
pub struct PyBlokusGame {
    game: BlokusGame,
}

#[pymethods]
impl PyBlokusGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - deny_list_path: optional plain-text file of action ids to never offer
    #[new]
    #[pyo3(signature = (deny_list_path = None))]
    fn new(deny_list_path: Option<String>) -> PyResult<Self> {
        let builder = BlokusGameBuilder::new();
        let builder = match deny_list_path {
            Some(path) => builder
                .deny_list_path(path)
                .map_err(|e| PyIOError::new_err(e.to_string()))?,
            None => builder,
        };
        Ok(Self {
            game: builder.build(),
        })
    }

    /// Availability mask (length 17836, `0`/`1`) for a player.
    fn get_valid_moves<'py>(&self, py: Python<'py>, player: i8) -> PyResult<Bound<'py, PyArray1<i8>>> {
        let player = player_from_sign(player)?;
        let mask = self.game.get_valid_moves(player);
        Ok(PyArray1::from_vec_bound(py, mask.to_i8()))
    }

    /// Place an action for the current player.
    ///
    /// The id must come from `get_valid_moves` for that player.
    fn play_action(&mut self, action: usize) -> PyResult<()> {
        let action = action_from_int(action)?;
        self.game.play_action(action);
        Ok(())
    }

    /// Action id for a hand-entered placement by the player to move.
    ///
    /// Raises ValueError for unknown shapes, unsupported orientations and
    /// illegal placements.
    #[pyo3(signature = (shape, x, y, degrees = 0, mirrored = false))]
    fn encode_placement(
        &self,
        shape: &str,
        x: i16,
        y: i16,
        degrees: u16,
        mirrored: bool,
    ) -> PyResult<usize> {
        self.game
            .parse_placement(shape, Cell::new(x, y), degrees, mirrored)
            .map(|action| action.index())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Hand the move to the opponent.
    fn pass_turn(&mut self) {
        self.game.pass_turn();
    }

    /// `(is_over, result)` with `result` relative to `player`: 1, -1 or 0.
    fn check_game_over(&self, player: i8) -> PyResult<(bool, i8)> {
        let player = player_from_sign(player)?;
        Ok(match self.game.check_game_over(player) {
            Some(value) => (true, value),
            None => (false, 0),
        })
    }

    /// Geometry of an action id.
    fn translate_action<'py>(&self, py: Python<'py>, action: usize) -> PyResult<Bound<'py, PyDict>> {
        let action = action_from_int(action)?;
        placement_to_dict(py, &self.game.translate_action(action))
    }

    /// Grid as a 14x14 array of `1`, `-1` and `0`.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let side = BOARD_SIZE as usize;
        PyArray1::from_vec_bound(py, self.game.board())
            .reshape([side, side])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    fn score(&self, player: i8) -> PyResult<u32> {
        Ok(self.game.score(player_from_sign(player)?))
    }

    /// Names of shapes the player has not placed.
    fn remaining_shapes(&self, player: i8) -> PyResult<Vec<&'static str>> {
        let player = player_from_sign(player)?;
        Ok(self
            .game
            .remaining_shapes(player)
            .into_iter()
            .map(|shape| shape.name())
            .collect())
    }

    /// Sign of the player to move.
    #[getter]
    fn current_player(&self) -> i8 {
        self.game.current_player().label()
    }

    /// Placements made so far.
    #[getter]
    fn rounds(&self) -> u32 {
        self.game.round()
    }

    /// Independent copy for simulation.
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.game.result().is_some() {
            "terminal"
        } else {
            "ongoing"
        };
        format!(
            "BlokusGame(rounds={}, current={}, status={})",
            self.game.round(),
            self.game.current_player().label(),
            status
        )
    }
}
