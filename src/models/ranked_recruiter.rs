//! Ranked recruiter model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecruiterAggregate;

/// The rule that produced a productivity index.
///
/// # Example
///
/// ```
/// use ranking_engine::models::ScoreRule;
///
/// let rule = ScoreRule::Ratio;
/// assert_eq!(serde_json::to_string(&rule).unwrap(), "\"ratio\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    /// The recruiter closed nothing; the score is zero.
    NoClosures,
    /// Closures exist but the average is missing or zero; the score scales with volume.
    DegenerateDays,
    /// Closures divided by average days, scaled by 100.
    Ratio,
}

/// A recruiter aggregate with its score and final position.
///
/// The aggregate's fields are flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRecruiter {
    /// The aggregate this entry was ranked from.
    #[serde(flatten)]
    pub recruiter: RecruiterAggregate,
    /// The productivity index, at most 2 decimal places.
    pub score: Decimal,
    /// Which rule produced the score.
    pub score_rule: ScoreRule,
    /// 1-based dense position in the ranking.
    pub position: u32,
}

impl RankedRecruiter {
    /// Returns true if the entry sits within the first `podium_size` positions.
    ///
    /// # Example
    ///
    /// ```
    /// use ranking_engine::models::{RankedRecruiter, RecruiterAggregate, ScoreRule};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = RankedRecruiter {
    ///     recruiter: RecruiterAggregate::new("rec_001", "Ana", 1, Some(Decimal::ONE)).unwrap(),
    ///     score: Decimal::from(100),
    ///     score_rule: ScoreRule::Ratio,
    ///     position: 2,
    /// };
    /// assert!(entry.is_podium(3));
    /// assert!(!entry.is_podium(1));
    /// ```
    pub fn is_podium(&self, podium_size: u32) -> bool {
        self.position <= podium_size
    }
}
