//! Player identification.
//!
//! Generals is strictly two-player. Grids store ownership as a sign, so each
//! `Player` maps to +1 or -1 and the opponent is always the negated sign.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One of the two players.
///
/// `First` owns the top-left general and is encoded as +1 on every signed
/// grid; `Second` owns the bottom-right general and is encoded as -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// The sign this player carries on the troop and ownership grids.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }

    /// The sign as stored on ownership and general grids.
    #[must_use]
    pub const fn marker(self) -> i8 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Recover a player from its sign.
    pub fn from_sign(sign: i32) -> Result<Self, GameError> {
        match sign {
            1 => Ok(Player::First),
            -1 => Ok(Player::Second),
            other => Err(GameError::InvalidPlayer(other)),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {:+}", self.sign())
    }
}
