//! Python bindings for the Generals engine.
//!
//! Exposes the board and rules to a Python search and training loop. Players
//! are passed as `1` / `-1`; malformed inputs raise `ValueError`.
//!
//! # Quick Start
//!
//! ```python
//! import generals_zero as gz
//!
//! game = gz.GeneralsGame(5, 5)
//! board = game.initial_board()
//! mask = game.legal_action_mask(board, 1)          # numpy bool, len 100
//! board, player = game.apply_action(board, 1, int(mask.nonzero()[0][0]))
//! x = game.canonical_view(board, player).to_array() # numpy f32, len 100
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_board;
mod py_game;
mod py_nn;
mod py_players;

pub use py_board::*;
pub use py_game::*;
pub use py_nn::*;
pub use py_players::*;

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Reject sizes the engine would panic on.
pub(crate) fn check_dims(width: usize, height: usize) -> PyResult<()> {
    if width == 0 || height == 0 || width * height < 2 {
        return Err(PyValueError::new_err(format!(
            "board must have positive dimensions and at least 2 cells, got {width}x{height}"
        )));
    }
    Ok(())
}

/// generals_zero: Generals rules for AlphaZero-style training.
#[pymodule]
fn generals_zero(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGeneralsGame>()?;

    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyPolicyValueNetwork>()?;

    m.add_function(wrap_pyfunction!(pit, m)?)?;
    m.add_function(wrap_pyfunction!(pit_random, m)?)?;

    Ok(())
}
