//! Move directions.
//!
//! The numeric code of each direction is part of the action-index contract:
//! Up = 0, Left = 1, Down = 2, Right = 3.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One of the four orthogonal directions a stack of troops can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Row-decreasing.
    Up,
    /// Column-decreasing.
    Left,
    /// Row-increasing.
    Down,
    /// Column-increasing.
    Right,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Number of directions (the outermost axis of the action space).
    pub const COUNT: usize = 4;

    /// The code used in action indices and policy channels.
    #[must_use]
    pub const fn code(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }

    /// `(row_delta, col_delta)` of a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }

    /// The direction seen through a left-right mirror.
    #[must_use]
    pub const fn mirror_horizontal(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            other => other,
        }
    }

    /// The direction seen through a top-bottom mirror.
    #[must_use]
    pub const fn mirror_vertical(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            other => other,
        }
    }

    /// Destination of a step from `(row, col)`, or `None` if it leaves a
    /// `height x width` board.
    #[must_use]
    pub fn step_from(self, row: usize, col: usize, height: usize, width: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < height && col < width).then_some((row, col))
    }
}

impl TryFrom<usize> for Direction {
    type Error = GameError;

    fn try_from(code: usize) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code)
            .copied()
            .ok_or(GameError::InvalidDirection(code))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
