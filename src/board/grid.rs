//! Row-major cell grid.
//!
//! Backed by `im::Vector`, so cloning a grid is O(1) and the clone behaves as
//! an independent value: writes to one copy are never visible through another.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A `height x width` grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T: Clone> {
    width: usize,
    height: usize,
    cells: Vector<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: std::iter::repeat(fill).take(width * height).collect(),
        }
    }

    /// Build a grid from row-major values.
    ///
    /// Panics if `values` does not hold exactly `width * height` cells.
    pub fn from_vec(width: usize, height: usize, values: Vec<T>) -> Self {
        assert_eq!(values.len(), width * height, "Grid size must match dimensions");
        Self {
            width,
            height,
            cells: Vector::from(values),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width, "cell off the grid");
        row * self.width + col
    }

    /// Value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    /// Values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().copied()
    }

    /// Every `(row, col)` coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    /// First cell (row-major) whose value satisfies `pred`.
    pub fn position(&self, pred: impl Fn(T) -> bool) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&v| pred(v))
            .map(|i| (i / self.width, i % self.width))
    }

    /// Apply `f` to every cell, producing a new grid.
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Apply `f` to every cell in place.
    pub fn update(&mut self, f: impl Fn(T) -> T) {
        for v in self.cells.iter_mut() {
            *v = f(*v);
        }
    }

    /// Mirror left-right (column `c` becomes `width - 1 - c`).
    pub fn flip_horizontal(&mut self) {
        let flipped: Vector<T> = self
            .coords()
            .map(|(row, col)| self.get(row, self.width - 1 - col))
            .collect();
        self.cells = flipped;
    }

    /// Mirror top-bottom (row `r` becomes `height - 1 - r`).
    pub fn flip_vertical(&mut self) {
        let flipped: Vector<T> = self
            .coords()
            .map(|(row, col)| self.get(self.height - 1 - row, col))
            .collect();
        self.cells = flipped;
    }

    /// Copy out the values in row-major order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<i32> {
        // 0 1 2
        // 3 4 5
        Grid::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5])
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(3, 2, 0i32);
        assert_eq!(grid.len(), 6);
        grid.set(1, 2, 7);
        assert_eq!(grid.get(1, 2), 7);
        assert_eq!(grid.to_vec(), vec![0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn test_coords_row_major() {
        let coords: Vec<_> = sample().coords().collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_flip_horizontal() {
        let mut grid = sample();
        grid.flip_horizontal();
        assert_eq!(grid.to_vec(), vec![2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn test_flip_vertical() {
        let mut grid = sample();
        grid.flip_vertical();
        assert_eq!(grid.to_vec(), vec![3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn test_position_and_map() {
        let grid = sample();
        assert_eq!(grid.position(|v| v == 4), Some((1, 1)));
        assert_eq!(grid.position(|v| v == 9), None);

        let negated = grid.map(|v| -v);
        assert_eq!(negated.to_vec(), vec![0, -1, -2, -3, -4, -5]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.set(0, 0, 99);
        copy.update(|v| v + 1);

        assert_eq!(original.to_vec(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(copy.get(0, 0), 100);
    }

    #[test]
    #[should_panic(expected = "Grid size must match dimensions")]
    fn test_from_vec_wrong_size() {
        Grid::from_vec(2, 2, vec![1, 2, 3]);
    }
}
