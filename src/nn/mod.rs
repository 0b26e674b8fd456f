//! Neural network integration.
//!
//! ## Overview
//!
//! - **Encoding**: `StateEncoder` trait and the four-layer `BoardEncoder`
//! - **Traits**: `PolicyValueNetwork`, implemented outside the crate
//! - **Baseline**: `UniformPolicyZeroValue` for testing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use generals_zero::nn::{BoardEncoder, StateEncoder, PolicyValueNetwork};
//!
//! let encoder = BoardEncoder::new(5, 5);
//! let view = game.canonical_view(&board, player);
//! let (policy, value) = network.predict(&encoder.encode(&view));
//! ```

pub mod encoder;
pub mod traits;

// Re-export main types
pub use encoder::{BoardEncoder, StateEncoder, BOARD_LAYERS};
pub use traits::{EncodedState, PolicyValueNetwork, UniformPolicyZeroValue};
