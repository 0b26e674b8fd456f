//! Action-index encoding.
//!
//! An action is a single integer in `[0, width * height * 4)`. The direction
//! is the most significant component; the remainder is the source cell in
//! row-major order:
//!
//! ```text
//! action = direction * (width * height) + row * width + col
//! ```
//!
//! Search and the network's policy head index actions the same way, so this
//! layout must not change.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::GameError;

/// A decoded action: move the stack at `(row, col)` one cell in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self { row, col, direction }
    }
}

/// The action space of a `width x height` board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSpace {
    pub width: usize,
    pub height: usize,
}

impl ActionSpace {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells on the board (one direction channel).
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Total number of actions.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.cells() * Direction::COUNT
    }

    /// Encode a move as an action index.
    ///
    /// The move must lie on the board.
    #[must_use]
    pub fn encode(&self, mv: Move) -> usize {
        debug_assert!(mv.row < self.height && mv.col < self.width, "move off the board");
        mv.direction.code() * self.cells() + mv.row * self.width + mv.col
    }

    /// Decode an action index into a move.
    ///
    /// Indices at or past [`ActionSpace::size`] fail with
    /// [`GameError::ActionOutOfRange`].
    pub fn decode(&self, action: usize) -> Result<Move, GameError> {
        let size = self.size();
        if action >= size {
            return Err(GameError::ActionOutOfRange { action, size });
        }
        let cells = self.cells();
        let direction = Direction::try_from(action / cells)?;
        let cell = action % cells;
        Ok(Move {
            row: cell / self.width,
            col: cell % self.width,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        let space = ActionSpace::new(5, 5);
        assert_eq!(space.cells(), 25);
        assert_eq!(space.size(), 100);

        let space = ActionSpace::new(3, 2);
        assert_eq!(space.size(), 24);
    }

    #[test]
    fn test_encode_layout() {
        let space = ActionSpace::new(4, 3);
        assert_eq!(space.encode(Move::new(0, 0, Direction::Up)), 0);
        assert_eq!(space.encode(Move::new(0, 1, Direction::Up)), 1);
        assert_eq!(space.encode(Move::new(1, 0, Direction::Up)), 4);
        assert_eq!(space.encode(Move::new(0, 0, Direction::Left)), 12);
        assert_eq!(space.encode(Move::new(2, 3, Direction::Right)), 3 * 12 + 2 * 4 + 3);
    }

    #[test]
    fn test_decode_non_square() {
        let space = ActionSpace::new(4, 3);
        let mv = space.decode(3 * 12 + 2 * 4 + 3).unwrap();
        assert_eq!(mv, Move::new(2, 3, Direction::Right));

        let mv = space.decode(12 + 5).unwrap();
        assert_eq!(mv, Move::new(1, 1, Direction::Left));
    }

    #[test]
    fn test_decode_every_action_inverts() {
        let space = ActionSpace::new(3, 5);
        for action in 0..space.size() {
            let mv = space.decode(action).unwrap();
            assert_eq!(space.encode(mv), action);
        }
    }

    #[test]
    fn test_decode_out_of_range() {
        let space = ActionSpace::new(5, 5);
        assert!(matches!(
            space.decode(100),
            Err(GameError::ActionOutOfRange { action: 100, size: 100 })
        ));
        assert!(matches!(
            space.decode(250),
            Err(GameError::ActionOutOfRange { action: 250, size: 100 })
        ));
    }

    #[test]
    fn test_decode_empty_space() {
        let space = ActionSpace::new(0, 3);
        assert!(matches!(
            space.decode(0),
            Err(GameError::ActionOutOfRange { action: 0, size: 0 })
        ));
    }
}
