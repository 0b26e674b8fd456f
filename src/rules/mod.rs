//! Rules trait for game implementations.
//!
//! `GameRules` is the boundary between the engine and the search/learning
//! driver. The driver never touches board internals; it asks the rules for
//! masks, transitions, terminal values and training views.

pub mod engine;

pub use engine::{GameRules, Symmetries};
