//! Engine error type.
//!
//! Rule violations during play are silent no-ops, not errors. `GameError`
//! covers caller bugs at the boundary: malformed action indices, unknown
//! player signs, mis-sized policy vectors, agents with nothing to play and
//! corrupt snapshots.

use thiserror::Error;

use super::player::Player;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid direction code {0} (expected 0..=3)")]
    InvalidDirection(usize),

    #[error("action {action} out of range for action space of size {size}")]
    ActionOutOfRange { action: usize, size: usize },

    #[error("invalid player sign {0} (expected +1 or -1)")]
    InvalidPlayer(i32),

    #[error("policy length {actual} does not match action space size {expected}")]
    PolicyLength { expected: usize, actual: usize },

    #[error("{player} had no action to play at ply {ply}")]
    NoLegalAction { player: Player, ply: usize },

    #[error("inconsistent board: {0}")]
    InvalidBoard(String),

    #[error("board snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}
