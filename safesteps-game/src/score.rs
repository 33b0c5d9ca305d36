//! Final-score summary and star tiers.
use serde::{Deserialize, Serialize};

/// Star tiers awarded at the end of a session. Every finished run earns at
/// least one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarTier {
    One,
    Two,
    Three,
}

impl StarTier {
    /// Tier for a rounded percentage: 90+ earns three stars, 70+ earns two.
    #[must_use]
    pub const fn from_percentage(percentage: u32) -> Self {
        if percentage >= 90 {
            StarTier::Three
        } else if percentage >= 70 {
            StarTier::Two
        } else {
            StarTier::One
        }
    }

    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            StarTier::One => 1,
            StarTier::Two => 2,
            StarTier::Three => 3,
        }
    }
}

/// Percentage of correct answers, rounded to the nearest integer.
/// Zero rounds is treated as a zero score rather than a division error.
#[must_use]
pub fn percentage(score: usize, rounds: usize) -> u32 {
    if rounds == 0 {
        return 0;
    }
    let pct = (score as f64 / rounds as f64) * 100.0;
    // scores never exceed rounds, so pct stays within 0..=100
    pct.round() as u32
}

/// Everything the completion screen displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: usize,
    pub rounds: usize,
    pub percentage: u32,
    pub tier: StarTier,
}

impl SessionSummary {
    #[must_use]
    pub fn new(score: usize, rounds: usize) -> Self {
        let percentage = percentage(score, rounds);
        Self {
            score,
            rounds,
            percentage,
            tier: StarTier::from_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(9, 10), 90);
        assert_eq!(percentage(7, 10), 70);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(SessionSummary::new(10, 10).tier, StarTier::Three);
        assert_eq!(SessionSummary::new(9, 10).tier, StarTier::Three);
        assert_eq!(SessionSummary::new(8, 10).tier, StarTier::Two);
        assert_eq!(SessionSummary::new(7, 10).tier, StarTier::Two);
        assert_eq!(SessionSummary::new(6, 10).tier, StarTier::One);
        assert_eq!(SessionSummary::new(0, 5).tier, StarTier::One);
    }

    #[test]
    fn every_run_earns_at_least_one_star() {
        for rounds in [5, 10, 15] {
            for score in 0..=rounds {
                assert!(SessionSummary::new(score, rounds).tier.stars() >= 1);
            }
        }
    }
}
