//! Head-to-head evaluation of two agents.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Player};
use crate::rules::GameRules;

use super::agent::Agent;

/// Tally of a match between agent one and agent two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaResult {
    pub one_won: u32,
    pub two_won: u32,
    pub draws: u32,
}

impl ArenaResult {
    #[must_use]
    pub fn games(&self) -> u32 {
        self.one_won + self.two_won + self.draws
    }
}

/// Plays complete games between two agents.
pub struct Arena<'g, G: GameRules> {
    game: &'g G,
    max_moves: usize,
}

impl<'g, G: GameRules> Arena<'g, G> {
    pub fn new(game: &'g G) -> Self {
        Self { game, max_moves: 10_000 }
    }

    /// Cap on plies per game. A game that hits the cap counts as a draw.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Play one game, `first` moving first.
    ///
    /// Returns the terminal value from the first player's perspective:
    /// 1 for a win, -1 for a loss, anything else is a draw. Fails if an agent
    /// returns an action the rules cannot decode, or has no move to offer.
    pub fn play_game<A, B>(&self, first: &mut A, second: &mut B) -> Result<f32, GameError>
    where
        A: Agent<G>,
        B: Agent<G>,
    {
        let mut board = self.game.initial_board();
        let mut player = Player::First;

        for ply in 0..self.max_moves {
            let value = self.game.terminal_value(&board, player);
            if value != 0.0 {
                return Ok(value * player.sign() as f32);
            }

            let action = match player {
                Player::First => first.select_action(self.game, &board, player),
                Player::Second => second.select_action(self.game, &board, player),
            };
            let action = action.ok_or(GameError::NoLegalAction { player, ply })?;

            let (next, to_move) = self.game.apply_action(&board, player, action)?;
            board = next;
            player = to_move;
        }

        Ok(0.0)
    }

    /// Play `games` games, agent one moving first in the first half and
    /// second in the rest.
    pub fn play_games<A, B>(&self, games: u32, one: &mut A, two: &mut B) -> Result<ArenaResult, GameError>
    where
        A: Agent<G>,
        B: Agent<G>,
    {
        let mut result = ArenaResult::default();
        let half = games / 2;

        for _ in 0..half {
            tally(&mut result, self.play_game(one, two)?);
        }
        for _ in half..games {
            tally(&mut result, -self.play_game(two, one)?);
        }

        Ok(result)
    }
}

fn tally(result: &mut ArenaResult, value: f32) {
    if value == 1.0 {
        result.one_won += 1;
    } else if value == -1.0 {
        result.two_won += 1;
    } else {
        result.draws += 1;
    }
}
