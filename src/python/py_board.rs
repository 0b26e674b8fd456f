//! Board bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::board::{Board, Grid};
use crate::core::{Direction, Player};

use super::{check_dims, to_py_err};

/// Python wrapper for a Generals board.
///
/// Players are passed as `1` or `-1`.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

fn grid_numpy<'py, T: numpy::Element + Copy>(py: Python<'py>, grid: &Grid<T>) -> PyResult<Bound<'py, PyArray2<T>>> {
    PyArray1::from_vec_bound(py, grid.to_vec()).reshape([grid.height(), grid.width()])
}

#[pymethods]
impl PyBoard {
    /// Opening position of a `width x height` game with default rules.
    #[new]
    fn new(width: usize, height: usize) -> PyResult<Self> {
        check_dims(width, height)?;
        Ok(Self(Board::new(width, height)))
    }

    #[getter]
    fn width(&self) -> usize {
        self.0.width()
    }

    #[getter]
    fn height(&self) -> usize {
        self.0.height()
    }

    #[getter]
    fn step(&self) -> u32 {
        self.0.step()
    }

    /// Troop counts as a `(height, width)` int32 array.
    fn troops<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i32>>> {
        grid_numpy(py, self.0.troops())
    }

    /// Ownership as a `(height, width)` int8 array.
    fn owns<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        grid_numpy(py, self.0.owns())
    }

    /// General markers as a `(height, width)` int8 array.
    fn generals<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        grid_numpy(py, self.0.generals())
    }

    /// Move troops in place. Returns whether anything moved.
    fn move_troops(&mut self, row: usize, col: usize, direction: usize, player: i32) -> PyResult<bool> {
        let direction = Direction::try_from(direction).map_err(to_py_err)?;
        let player = Player::from_sign(player).map_err(to_py_err)?;
        Ok(self.0.move_troops(row, col, direction, player))
    }

    fn valid_moves<'py>(&self, py: Python<'py>, player: i32) -> PyResult<Bound<'py, PyArray2<bool>>> {
        let player = Player::from_sign(player).map_err(to_py_err)?;
        grid_numpy(py, &self.0.valid_moves(player))
    }

    fn game_ended(&self, player: i32) -> PyResult<f32> {
        let player = Player::from_sign(player).map_err(to_py_err)?;
        Ok(self.0.game_ended(player))
    }

    /// Flat network input of length `4 * width * height`.
    fn to_array<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_vec_bound(py, self.0.to_array())
    }

    fn to_key(&self) -> String {
        self.0.to_key()
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.0.to_bytes().map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        Board::from_bytes(bytes).map(Self).map_err(to_py_err)
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.fingerprint()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board({}x{}, step={})",
            self.0.width(),
            self.0.height(),
            self.0.step()
        )
    }
}
