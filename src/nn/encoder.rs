//! State encoding for neural network input.
//!
//! Transforms a board into the tensor layout the network expects.

use crate::board::Board;
use crate::nn::traits::EncodedState;

/// Number of input layers: step phase, troops, ownership, generals.
pub const BOARD_LAYERS: usize = 4;

/// Encodes boards into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode a board. Callers pass the canonical view, so the encoding is
    /// always from the mover's perspective.
    fn encode(&self, board: &Board) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// The four-layer board encoding.
///
/// Output shape is `[4, height, width]`, data identical to
/// [`Board::to_array`]:
/// 1. `step % 50` broadcast over every cell
/// 2. signed troop counts
/// 3. ownership (+1 / -1 / 0)
/// 4. general markers (+1 / -1 / 0)
#[derive(Clone, Debug)]
pub struct BoardEncoder {
    width: usize,
    height: usize,
}

impl BoardEncoder {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl StateEncoder for BoardEncoder {
    fn encode(&self, board: &Board) -> EncodedState {
        debug_assert_eq!(
            (board.width(), board.height()),
            (self.width, self.height),
            "Board size must match encoder"
        );
        EncodedState::new(board.to_array(), self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![BOARD_LAYERS, self.height, self.width]
    }

    fn action_space_size(&self) -> usize {
        self.width * self.height * crate::core::Direction::COUNT
    }
}
