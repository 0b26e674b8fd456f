//! Baseline agents and head-to-head play.
//!
//! - `RandomAgent`: uniform over the legal mask
//! - `PolicyAgent`: plays a network's policy on the canonical view
//! - `Arena`: pits two agents against each other

pub mod agent;
pub mod arena;

pub use agent::{sample_policy, Agent, PolicyAgent, RandomAgent};
pub use arena::{Arena, ArenaResult};
