//! Game rules bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{GameConfig, Player};
use crate::games::GeneralsGame;
use crate::rules::GameRules;

use super::py_board::PyBoard;
use super::{check_dims, to_py_err};

/// Python wrapper for the Generals rules.
///
/// Mirrors the interface a search or training loop drives: every method takes
/// a board and returns new values without mutating it.
#[pyclass(name = "GeneralsGame")]
#[derive(Clone, Debug)]
pub struct PyGeneralsGame(pub GeneralsGame);

#[pymethods]
impl PyGeneralsGame {
    #[new]
    #[pyo3(signature = (width = 5, height = 5, step_limit = 100, draw_value = 1e-4))]
    fn new(width: usize, height: usize, step_limit: u32, draw_value: f32) -> PyResult<Self> {
        check_dims(width, height)?;
        let config = GameConfig::new(width, height)
            .with_step_limit(step_limit)
            .with_draw_value(draw_value);
        Ok(Self(GeneralsGame::from_config(config)))
    }

    fn initial_board(&self) -> PyBoard {
        PyBoard(self.0.initial_board())
    }

    /// `(width, height)`.
    fn board_dims(&self) -> (usize, usize) {
        self.0.board_dims()
    }

    fn action_space_size(&self) -> usize {
        self.0.action_space_size()
    }

    /// Returns `(next_board, next_player)`.
    fn apply_action(&self, board: &PyBoard, player: i32, action: usize) -> PyResult<(PyBoard, i32)> {
        let player = Player::from_sign(player).map_err(to_py_err)?;
        let (next, to_move) = self.0.apply_action(&board.0, player, action).map_err(to_py_err)?;
        Ok((PyBoard(next), to_move.sign()))
    }

    fn legal_action_mask<'py>(&self, py: Python<'py>, board: &PyBoard, player: i32) -> PyResult<Bound<'py, PyArray1<bool>>> {
        let player = Player::from_sign(player).map_err(to_py_err)?;
        Ok(PyArray1::from_vec_bound(py, self.0.legal_action_mask(&board.0, player)))
    }

    fn terminal_value(&self, board: &PyBoard, player: i32) -> PyResult<f32> {
        let player = Player::from_sign(player).map_err(to_py_err)?;
        Ok(self.0.terminal_value(&board.0, player))
    }

    fn canonical_view(&self, board: &PyBoard, player: i32) -> PyResult<PyBoard> {
        let player = Player::from_sign(player).map_err(to_py_err)?;
        Ok(PyBoard(self.0.canonical_view(&board.0, player).into_owned()))
    }

    /// Four `(board, policy)` pairs for training-data augmentation.
    fn symmetries<'py>(
        &self,
        py: Python<'py>,
        board: &PyBoard,
        policy: Vec<f32>,
    ) -> PyResult<Vec<(PyBoard, Bound<'py, PyArray1<f32>>)>> {
        let pairs = self.0.symmetries(&board.0, &policy).map_err(to_py_err)?;
        Ok(pairs
            .into_iter()
            .map(|(b, pi)| (PyBoard(b), PyArray1::from_vec_bound(py, pi)))
            .collect())
    }

    fn serialize(&self, board: &PyBoard) -> String {
        self.0.serialize(&board.0)
    }

    fn __repr__(&self) -> String {
        let (w, h) = self.0.board_dims();
        format!("GeneralsGame({w}x{h})")
    }
}
