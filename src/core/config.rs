//! Match configuration.
//!
//! A duel is configured once at session start:
//! - `ScoringRules`: the support/suppress constants of the effective-points formula
//! - `MatchConfig`: round count, in-match deck size, starter collection shape
//!
//! The defaults are the five-round, seven-card ruleset.

use serde::{Deserialize, Serialize};

/// Constants for the support/suppress branches of the scoring formula.
///
/// A supported (or suppressed) card gains (or loses)
/// `ceil(opponent.points / divisor) * multiplier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringRules {
    pub divisor: u32,
    pub multiplier: u32,
}

impl ScoringRules {
    /// Current ruleset: `ceil(points / 3) * 2`.
    pub const STANDARD: Self = Self {
        divisor: 3,
        multiplier: 2,
    };

    /// Earlier per-round-transfer ruleset: `ceil(points / 5) * 4`.
    pub const LEGACY: Self = Self {
        divisor: 5,
        multiplier: 4,
    };

    /// Create scoring rules. A zero divisor is treated as 1.
    #[must_use]
    pub const fn new(divisor: u32, multiplier: u32) -> Self {
        Self {
            divisor: if divisor == 0 { 1 } else { divisor },
            multiplier,
        }
    }

    /// Bonus (or penalty) an opponent with `points` applies.
    #[must_use]
    pub const fn swing(&self, points: u32) -> u32 {
        points.div_ceil(self.divisor) * self.multiplier
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds per match.
    pub rounds: u32,

    /// Cards each side brings into a match.
    pub deck_size: usize,

    /// Copies of each element in a freshly generated collection.
    pub copies_per_element: usize,

    /// Scoring formula constants.
    pub scoring: ScoringRules,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            deck_size: 7,
            copies_per_element: 2,
            scoring: ScoringRules::STANDARD,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "A match needs at least 1 round");
        self.rounds = rounds;
        self
    }

    /// Set the in-match deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        assert!(deck_size > 0, "In-match deck must hold at least 1 card");
        self.deck_size = deck_size;
        self
    }

    /// Set how many cards of each element a starter collection holds.
    #[must_use]
    pub fn with_copies_per_element(mut self, copies: usize) -> Self {
        self.copies_per_element = copies;
        self
    }

    /// Set the scoring constants.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }
}
