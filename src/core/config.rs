//! Game configuration types.
//!
//! - `RuleConfig`: growth cadence and step-limit scoring
//! - `GameConfig`: board dimensions plus rules
//!
//! The defaults reproduce the reference game balance. Changing the growth
//! periods produces a materially different game, so trained networks are
//! only valid for the rules they were trained under.

use serde::{Deserialize, Serialize};

/// Troop growth cadence and end-of-game scoring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Every owned cell of the mover grows when `step % period` is 0 or 1.
    pub broad_growth_period: u32,

    /// Otherwise the mover's general grows when `step % period` is 0 or 1.
    pub general_growth_period: u32,

    /// No growth at all before this step.
    pub growth_start_step: u32,

    /// The game is scored on troop totals once `step` exceeds this.
    pub step_limit: u32,

    /// Terminal value of an exact troop tie at the step limit.
    /// Small and nonzero so it is distinguishable from "not over".
    pub draw_value: f32,
}

impl RuleConfig {
    /// Both growth periods are nonzero. Every other value is playable.
    #[must_use]
    pub fn has_positive_periods(&self) -> bool {
        self.broad_growth_period > 0 && self.general_growth_period > 0
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            broad_growth_period: 50,
            general_growth_period: 4,
            growth_start_step: 2,
            step_limit: 100,
            draw_value: 1e-4,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Growth and scoring rules.
    pub rules: RuleConfig,
}

impl GameConfig {
    /// Create a configuration with default rules.
    ///
    /// Panics unless both dimensions are positive and the board has at least
    /// two cells (each general needs its own corner).
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be positive");
        assert!(width * height >= 2, "Board must have at least 2 cells");

        Self {
            width,
            height,
            rules: RuleConfig::default(),
        }
    }

    /// Set the step after which the game is scored on troop totals.
    #[must_use]
    pub fn with_step_limit(mut self, step_limit: u32) -> Self {
        self.rules.step_limit = step_limit;
        self
    }

    /// Set the terminal value of a tie at the step limit.
    #[must_use]
    pub fn with_draw_value(mut self, draw_value: f32) -> Self {
        self.rules.draw_value = draw_value;
        self
    }

    /// Replace the rule set wholesale.
    ///
    /// Panics if either growth period is zero.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        assert!(rules.has_positive_periods(), "Growth periods must be positive");
        self.rules = rules;
        self
    }

    /// Number of cells.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}
