//! Core engine types: players, directions, action encoding, configuration,
//! errors and RNG.
//!
//! Everything here is independent of the board representation.

pub mod action;
pub mod config;
pub mod direction;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionSpace, Move};
pub use config::{GameConfig, RuleConfig};
pub use direction::Direction;
pub use error::GameError;
pub use player::Player;
pub use rng::{GameRng, GameRngState};
