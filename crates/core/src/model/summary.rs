use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("summary needs at least one question")]
    NoQuestions,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

//
// ─── RESULT TIER ───────────────────────────────────────────────────────────────
//

/// Scoring band selected from the final percentage.
///
/// Thresholds are checked from the top; the highest one met wins:
/// - `Perfect`: 100
/// - `Excellent`: 80 and above
/// - `Good`: 60 and above
/// - `Fair`: 40 and above
/// - `NeedsPractice`: everything below 40
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTier {
    NeedsPractice,
    Fair,
    Good,
    Excellent,
    Perfect,
}

impl ResultTier {
    const THRESHOLDS: [(u8, ResultTier); 4] = [
        (100, ResultTier::Perfect),
        (80, ResultTier::Excellent),
        (60, ResultTier::Good),
        (40, ResultTier::Fair),
    ];

    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map_or(ResultTier::NeedsPractice, |(_, tier)| *tier)
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Final result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    score: u32,
    total: u32,
    percentage: u8,
    tier: ResultTier,
}

impl QuizSummary {
    /// Builds the summary for `score` correct answers out of `total`.
    ///
    /// The percentage is rounded to the nearest integer, halves rounding up.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::NoQuestions` if `total` is zero.
    /// Returns `SummaryError::ScoreExceedsTotal` if `score > total`.
    pub fn new(score: u32, total: u32) -> Result<Self, SummaryError> {
        if total == 0 {
            return Err(SummaryError::NoQuestions);
        }
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }

        let score_wide = u64::from(score);
        let total_wide = u64::from(total);
        let rounded = (score_wide * 200 + total_wide) / (total_wide * 2);
        let percentage = u8::try_from(rounded).unwrap_or(100);

        Ok(Self {
            score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> ResultTier {
        self.tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(ResultTier::from_percentage(100), ResultTier::Perfect);
        assert_eq!(ResultTier::from_percentage(99), ResultTier::Excellent);
        assert_eq!(ResultTier::from_percentage(80), ResultTier::Excellent);
        assert_eq!(ResultTier::from_percentage(79), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(60), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(59), ResultTier::Fair);
        assert_eq!(ResultTier::from_percentage(40), ResultTier::Fair);
        assert_eq!(ResultTier::from_percentage(39), ResultTier::NeedsPractice);
        assert_eq!(ResultTier::from_percentage(0), ResultTier::NeedsPractice);
    }

    #[test]
    fn summary_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(QuizSummary::new(1, 8).unwrap().percentage(), 13);
        // 2/3 = 66.67%
        assert_eq!(QuizSummary::new(2, 3).unwrap().percentage(), 67);
        // 1/3 = 33.33%
        assert_eq!(QuizSummary::new(1, 3).unwrap().percentage(), 33);
    }

    #[test]
    fn summary_picks_tier_from_rounded_percentage() {
        let summary = QuizSummary::new(16, 20).unwrap();
        assert_eq!(summary.percentage(), 80);
        assert_eq!(summary.tier(), ResultTier::Excellent);

        let perfect = QuizSummary::new(20, 20).unwrap();
        assert_eq!(perfect.percentage(), 100);
        assert_eq!(perfect.tier(), ResultTier::Perfect);

        let none = QuizSummary::new(0, 20).unwrap();
        assert_eq!(none.percentage(), 0);
        assert_eq!(none.tier(), ResultTier::NeedsPractice);
    }

    #[test]
    fn summary_rejects_bad_counts() {
        assert_eq!(QuizSummary::new(0, 0).unwrap_err(), SummaryError::NoQuestions);
        assert_eq!(
            QuizSummary::new(5, 4).unwrap_err(),
            SummaryError::ScoreExceedsTotal { score: 5, total: 4 }
        );
    }
}
