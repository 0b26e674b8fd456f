//! Generals: a two-player territory-capture game.
//!
//! - Each player starts with a general holding one troop in opposite corners
//! - A move sends everything but one troop from an owned cell to a neighbor
//! - Generals grow every few steps; every owned cell grows every 50 steps
//! - Capturing the opposing general wins; past step 100 the larger army wins
//!
//! `GeneralsGame` implements [`crate::rules::GameRules`] over
//! [`crate::board::Board`], adding the action encoding, canonical views and
//! the four mirror symmetries used for training-data augmentation.

mod game;
mod symmetry;

pub use game::GeneralsGame;
pub use symmetry::Symmetry;
