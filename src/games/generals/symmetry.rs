//! Mirror symmetries of a board and its policy vector.
//!
//! A policy vector is laid out `[direction][row][col]`. Mirroring the board
//! left-right moves column `c` to `width - 1 - c` and turns every Left move
//! into a Right move, so the column axis is reversed and the Left and Right
//! channels swap. Top-bottom mirroring does the same to rows and Up/Down.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{ActionSpace, GameError, Move};

/// One of the four mirror symmetries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    Identity,
    /// Left-right mirror.
    Horizontal,
    /// Top-bottom mirror.
    Vertical,
    /// Both mirrors (a half turn).
    Both,
}

impl Symmetry {
    /// All symmetries, in the order `symmetries()` returns them.
    pub const ALL: [Symmetry; 4] = [
        Symmetry::Identity,
        Symmetry::Horizontal,
        Symmetry::Vertical,
        Symmetry::Both,
    ];

    /// `(mirror columns, mirror rows)`.
    const fn flips(self) -> (bool, bool) {
        match self {
            Symmetry::Identity => (false, false),
            Symmetry::Horizontal => (true, false),
            Symmetry::Vertical => (false, true),
            Symmetry::Both => (true, true),
        }
    }

    /// Mirrored copy of `board`.
    #[must_use]
    pub fn apply_board(self, board: &Board) -> Board {
        let (horizontal, vertical) = self.flips();
        let mut mirrored = board.clone();
        if horizontal {
            mirrored.hflip();
        }
        if vertical {
            mirrored.vflip();
        }
        mirrored
    }

    /// Where `mv` lands on the mirrored board.
    #[must_use]
    pub fn map_move(self, mv: Move, width: usize, height: usize) -> Move {
        let (horizontal, vertical) = self.flips();
        let mut mapped = mv;
        if horizontal {
            mapped.col = width - 1 - mapped.col;
            mapped.direction = mapped.direction.mirror_horizontal();
        }
        if vertical {
            mapped.row = height - 1 - mapped.row;
            mapped.direction = mapped.direction.mirror_vertical();
        }
        mapped
    }

    /// Action index of the mirrored move.
    pub fn map_action(self, space: ActionSpace, action: usize) -> Result<usize, GameError> {
        let mv = space.decode(action)?;
        Ok(space.encode(self.map_move(mv, space.width, space.height)))
    }

    /// Permute `policy` onto the mirrored board.
    ///
    /// Values are moved, never altered: `out[map_action(a)] == policy[a]`.
    pub fn apply_policy(self, space: ActionSpace, policy: &[f32]) -> Result<Vec<f32>, GameError> {
        if policy.len() != space.size() {
            return Err(GameError::PolicyLength {
                expected: space.size(),
                actual: policy.len(),
            });
        }

        let mut mirrored = vec![0.0; policy.len()];
        for (action, &p) in policy.iter().enumerate() {
            mirrored[self.map_action(space, action)?] = p;
        }
        Ok(mirrored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_map_move_horizontal() {
        let mv = Move::new(1, 0, Direction::Left);
        let mapped = Symmetry::Horizontal.map_move(mv, 4, 3);
        assert_eq!(mapped, Move::new(1, 3, Direction::Right));
    }

    #[test]
    fn test_map_move_vertical() {
        let mv = Move::new(0, 2, Direction::Up);
        let mapped = Symmetry::Vertical.map_move(mv, 4, 3);
        assert_eq!(mapped, Move::new(2, 2, Direction::Down));
    }

    #[test]
    fn test_map_move_both() {
        let mv = Move::new(0, 0, Direction::Right);
        assert_eq!(Symmetry::Both.map_move(mv, 4, 3), Move::new(2, 3, Direction::Left));
        assert_eq!(Symmetry::Identity.map_move(mv, 4, 3), mv);
    }

    #[test]
    fn test_policy_channels_swap() {
        // 2x1 board: one-hot on "left from (0, 1)".
        let space = ActionSpace::new(2, 1);
        let mut policy = vec![0.0; space.size()];
        policy[space.encode(Move::new(0, 1, Direction::Left))] = 1.0;

        let mirrored = Symmetry::Horizontal.apply_policy(space, &policy).unwrap();
        let target = space.encode(Move::new(0, 0, Direction::Right));
        assert_eq!(mirrored[target], 1.0);
        assert_eq!(mirrored.iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn test_each_symmetry_is_an_involution() {
        let space = ActionSpace::new(3, 2);
        let policy: Vec<f32> = (0..space.size()).map(|i| i as f32).collect();

        for sym in Symmetry::ALL {
            let once = sym.apply_policy(space, &policy).unwrap();
            let twice = sym.apply_policy(space, &once).unwrap();
            assert_eq!(twice, policy, "{:?} is not its own inverse", sym);
        }
    }

    #[test]
    fn test_wrong_policy_length() {
        let space = ActionSpace::new(3, 3);
        let err = Symmetry::Vertical.apply_policy(space, &[0.5; 10]).unwrap_err();
        assert!(matches!(err, GameError::PolicyLength { expected: 36, actual: 10 }));
    }
}
