//! # generals-zero
//!
//! Rules engine for Generals, a two-player grid game of troop movement and
//! territory capture, shaped for AlphaZero-style self-play.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: Boards are immutable from the driver's side.
//!    `GameRules::apply_action` returns a new board; the input is untouched.
//!
//! 2. **Persistent Data Structures**: Board layers are `im::Vector`-backed, so
//!    the copies a tree search makes are O(1) and never alias.
//!
//! 3. **Canonical Form**: Every view a network sees is re-expressed so the
//!    player to move is +1.
//!
//! ## Modules
//!
//! - `core`: Players, directions, action encoding, configuration, errors, RNG
//! - `board`: Grid storage and the board state machine
//! - `rules`: `GameRules` trait consumed by search and learning drivers
//! - `games`: The Generals adapter and its mirror symmetries
//! - `nn`: Network input encoding and the policy-value network seam
//! - `players`: Baseline agents and head-to-head matches
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod nn;
pub mod players;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionSpace, Direction, GameConfig, GameError, GameRng, GameRngState, Move, Player, RuleConfig,
};

pub use crate::board::{Board, Grid, Outcome};

pub use crate::rules::{GameRules, Symmetries};

pub use crate::games::{GeneralsGame, Symmetry};

pub use crate::nn::{BoardEncoder, EncodedState, PolicyValueNetwork, StateEncoder, UniformPolicyZeroValue};

pub use crate::players::{Agent, Arena, ArenaResult, PolicyAgent, RandomAgent};
