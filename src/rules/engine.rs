//! Rules trait consumed by search and learning drivers.
//!
//! Games implement `GameRules` to expose:
//! - The action space and its legality mask
//! - State transitions by action index
//! - Terminal values from a player's perspective
//! - Canonical and symmetric views for training data

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::core::{GameError, Player};

/// Symmetric `(board, policy)` pairs. Generals has exactly four.
pub type Symmetries<B> = SmallVec<[(B, Vec<f32>); 4]>;

/// Rules of a two-player, zero-sum game with a flat action space.
///
/// ## Implementation Notes
///
/// - Every method is pure: input boards are never mutated
/// - `apply_action` must be deterministic for search consistency
/// - `legal_action_mask` may admit actions that turn out to be no-ops; a
///   no-op still consumes a ply
/// - `terminal_value` returns 0 exactly when the game continues
pub trait GameRules {
    /// Game state.
    type Board: Clone;

    /// Opening position.
    fn initial_board(&self) -> Self::Board;

    /// `(width, height)` of the board.
    fn board_dims(&self) -> (usize, usize);

    /// Number of distinct action indices.
    fn action_space_size(&self) -> usize;

    /// Apply `action` for `player` to a copy of `board`.
    ///
    /// Returns the new board and the player to move next.
    fn apply_action(
        &self,
        board: &Self::Board,
        player: Player,
        action: usize,
    ) -> Result<(Self::Board, Player), GameError>;

    /// One flag per action index: whether `player` may attempt it.
    fn legal_action_mask(&self, board: &Self::Board, player: Player) -> Vec<bool>;

    /// 0 while the game continues; otherwise 1 / -1 for a win / loss by
    /// `player`, or a small nonzero value for a draw.
    fn terminal_value(&self, board: &Self::Board, player: Player) -> f32;

    /// The board as seen by `player`, re-expressed so the mover is always +1.
    fn canonical_view<'a>(&self, board: &'a Self::Board, player: Player) -> Cow<'a, Self::Board>;

    /// Training-equivalent transforms of a board and its policy vector.
    fn symmetries(
        &self,
        board: &Self::Board,
        policy: &[f32],
    ) -> Result<Symmetries<Self::Board>, GameError>;

    /// Stable key identifying the gameplay state, for transposition tables.
    fn serialize(&self, board: &Self::Board) -> String;

    // === Convenience Methods ===

    /// Indices of every action the mask admits.
    fn legal_actions(&self, board: &Self::Board, player: Player) -> Vec<usize> {
        self.legal_action_mask(board, player)
            .into_iter()
            .enumerate()
            .filter_map(|(action, legal)| legal.then_some(action))
            .collect()
    }

    /// Whether the game has ended.
    fn is_terminal(&self, board: &Self::Board, player: Player) -> bool {
        self.terminal_value(board, player) != 0.0
    }
}
