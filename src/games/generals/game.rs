//! Generals rules adapter.

use std::borrow::Cow;

use crate::board::Board;
use crate::core::{ActionSpace, Direction, GameConfig, GameError, Move, Player};
use crate::rules::{GameRules, Symmetries};

use super::symmetry::Symmetry;

/// Generals rules for a fixed board size.
///
/// Stateless: every method reads its input board and returns new values.
#[derive(Clone, Debug)]
pub struct GeneralsGame {
    config: GameConfig,
    space: ActionSpace,
}

impl GeneralsGame {
    /// Rules for a `width x height` board with the default cadence.
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_config(GameConfig::new(width, height))
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self {
            space: ActionSpace::new(config.width, config.height),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        self.space
    }

    /// Split an action index into source cell and direction.
    pub fn decode_action(&self, action: usize) -> Result<Move, GameError> {
        self.space.decode(action)
    }

    #[must_use]
    pub fn encode_action(&self, mv: Move) -> usize {
        self.space.encode(mv)
    }
}

impl GameRules for GeneralsGame {
    type Board = Board;

    fn initial_board(&self) -> Board {
        Board::with_config(&self.config)
    }

    fn board_dims(&self) -> (usize, usize) {
        (self.config.width, self.config.height)
    }

    fn action_space_size(&self) -> usize {
        self.space.size()
    }

    fn apply_action(&self, board: &Board, player: Player, action: usize) -> Result<(Board, Player), GameError> {
        let mv = self.decode_action(action)?;
        let mut next = board.clone();
        next.apply_move(mv, player);
        Ok((next, player.opponent()))
    }

    /// Source-cell legality tiled once per direction.
    ///
    /// Directions that would leave the board are not filtered out; they
    /// apply as no-ops.
    fn legal_action_mask(&self, board: &Board, player: Player) -> Vec<bool> {
        board.valid_moves(player).to_vec().repeat(Direction::COUNT)
    }

    fn terminal_value(&self, board: &Board, player: Player) -> f32 {
        board.game_ended(player)
    }

    fn canonical_view<'a>(&self, board: &'a Board, player: Player) -> Cow<'a, Board> {
        match player {
            Player::First => Cow::Borrowed(board),
            Player::Second => {
                let mut flipped = board.clone();
                flipped.flip_form();
                Cow::Owned(flipped)
            }
        }
    }

    /// Identity, left-right mirror, top-bottom mirror, and both.
    fn symmetries(&self, board: &Board, policy: &[f32]) -> Result<Symmetries<Board>, GameError> {
        Symmetry::ALL
            .iter()
            .map(|sym| -> Result<_, GameError> {
                Ok((sym.apply_board(board), sym.apply_policy(self.space, policy)?))
            })
            .collect()
    }

    fn serialize(&self, board: &Board) -> String {
        board.to_key()
    }
}
