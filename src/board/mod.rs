//! Board state: grids, move application, growth, terminal detection and
//! the sign and mirror transforms.
//!
//! ## Board
//!
//! Owns the mutable game state. All mutation goes through `apply_move` (or
//! its `move_troops` form), `grow_troops`, `flip_form`, `hflip` and `vflip`;
//! `clone()` yields an independent board.
//!
//! ## Grid
//!
//! Row-major `height x width` layer with O(1) clone via `im::Vector`.

pub mod grid;
pub mod outcome;
pub mod state;

pub use grid::Grid;
pub use outcome::Outcome;
pub use state::{Board, STEP_LAYER_PERIOD};
