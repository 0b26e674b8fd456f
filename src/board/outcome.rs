//! Game status from one player's perspective.

use serde::{Deserialize, Serialize};

/// Status of a game as seen by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Neither general has fallen and the step limit has not passed.
    Ongoing,
    /// Captured the opposing general, or led on troops at the step limit.
    Won,
    /// Lost the general, or trailed on troops at the step limit.
    Lost,
    /// Exact troop tie at the step limit.
    Draw,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// The same result seen by the other player.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Won => Outcome::Lost,
            Outcome::Lost => Outcome::Won,
            other => other,
        }
    }

    /// Scalar value for search and training targets.
    ///
    /// A draw maps to `draw_value`, which should be small and nonzero so a
    /// finished game never reads as "not over".
    #[must_use]
    pub fn value(self, draw_value: f32) -> f32 {
        match self {
            Outcome::Ongoing => 0.0,
            Outcome::Won => 1.0,
            Outcome::Lost => -1.0,
            Outcome::Draw => draw_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Outcome::Ongoing.value(1e-4), 0.0);
        assert_eq!(Outcome::Won.value(1e-4), 1.0);
        assert_eq!(Outcome::Lost.value(1e-4), -1.0);
        assert_eq!(Outcome::Draw.value(1e-4), 1e-4);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Outcome::Won.reversed(), Outcome::Lost);
        assert_eq!(Outcome::Lost.reversed(), Outcome::Won);
        assert_eq!(Outcome::Draw.reversed(), Outcome::Draw);
        assert_eq!(Outcome::Ongoing.reversed(), Outcome::Ongoing);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }
}
