//! Game implementations.
//!
//! - `generals`: the Generals territory-capture game

pub mod generals;

pub use generals::{GeneralsGame, Symmetry};
