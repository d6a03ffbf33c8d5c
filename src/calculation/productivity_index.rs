//! Productivity index calculation.
//!
//! The productivity index rewards recruiters who close more requisitions in
//! fewer days. It depends only on the closed count and the average days to
//! close, so it can be computed anywhere without I/O.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AuditStep, RecruiterAggregate, ScoreRule};

/// Score per closure when the average days to close is missing or zero.
pub const DEGENERATE_DAYS_MULTIPLIER: u32 = 10_000;

/// Scale applied to `closed_count / average_days_to_close`.
pub const RATIO_SCALE: u32 = 100;

/// Number of decimal places the index is rounded to.
pub const SCORE_DECIMAL_PLACES: u32 = 2;

/// Returns the rule that applies to the given closed count and average.
///
/// # Examples
///
/// ```
/// use ranking_engine::calculation::score_rule;
/// use ranking_engine::models::ScoreRule;
/// use rust_decimal::Decimal;
///
/// assert_eq!(score_rule(0, Some(Decimal::from(10))), ScoreRule::NoClosures);
/// assert_eq!(score_rule(3, None), ScoreRule::DegenerateDays);
/// assert_eq!(score_rule(3, Some(Decimal::from(2))), ScoreRule::Ratio);
/// ```
pub fn score_rule(closed_count: u32, average_days_to_close: Option<Decimal>) -> ScoreRule {
    if closed_count == 0 {
        return ScoreRule::NoClosures;
    }

    match average_days_to_close {
        None => ScoreRule::DegenerateDays,
        Some(days) if days.is_zero() => ScoreRule::DegenerateDays,
        Some(_) => ScoreRule::Ratio,
    }
}

/// Computes the productivity index for a recruiter.
///
/// - No closures: `0`, whatever the average.
/// - Average missing or zero: `closed_count * 10000`.
/// - Otherwise: `closed_count / average_days_to_close * 100`, rounded to 2
///   decimal places with halves rounded away from zero.
///
/// # Examples
///
/// ```
/// use ranking_engine::calculation::compute_score;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(compute_score(10, Some(Decimal::from(5))), Decimal::from(200));
/// assert_eq!(compute_score(7, Some(Decimal::from(3))), Decimal::from_str("233.33").unwrap());
/// assert_eq!(compute_score(5, Some(Decimal::ZERO)), Decimal::from(50000));
/// assert_eq!(compute_score(0, None), Decimal::ZERO);
/// ```
pub fn compute_score(closed_count: u32, average_days_to_close: Option<Decimal>) -> Decimal {
    let closed = Decimal::from(closed_count);

    match (score_rule(closed_count, average_days_to_close), average_days_to_close) {
        (ScoreRule::NoClosures, _) => Decimal::ZERO,
        // Saturates when the ratio leaves Decimal's range.
        (ScoreRule::Ratio, Some(days)) => closed
            .checked_div(days)
            .and_then(|ratio| ratio.checked_mul(Decimal::from(RATIO_SCALE)))
            .map(|scaled| {
                scaled.round_dp_with_strategy(
                    SCORE_DECIMAL_PLACES,
                    RoundingStrategy::MidpointAwayFromZero,
                )
            })
            .unwrap_or(Decimal::MAX),
        _ => closed * Decimal::from(DEGENERATE_DAYS_MULTIPLIER),
    }
}

/// The result of scoring one recruiter, including the audit step.
#[derive(Debug, Clone)]
pub struct ProductivityIndexResult {
    /// The productivity index.
    pub score: Decimal,
    /// The rule that produced the index.
    pub rule: ScoreRule,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Scores a recruiter aggregate and records how the score was reached.
///
/// # Arguments
///
/// * `aggregate` - The recruiter to score
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use ranking_engine::calculation::calculate_productivity_index;
/// use ranking_engine::models::{RecruiterAggregate, ScoreRule};
/// use rust_decimal::Decimal;
///
/// let aggregate = RecruiterAggregate::new("rec_001", "Ana", 10, Some(Decimal::from(5))).unwrap();
/// let result = calculate_productivity_index(&aggregate, 1);
///
/// assert_eq!(result.score, Decimal::from(200));
/// assert_eq!(result.rule, ScoreRule::Ratio);
/// assert_eq!(result.audit_step.rule_id, "productivity_index");
/// ```
pub fn calculate_productivity_index(
    aggregate: &RecruiterAggregate,
    step_number: u32,
) -> ProductivityIndexResult {
    let closed_count = aggregate.closed_count;
    let days = aggregate.average_days_to_close;
    let rule = score_rule(closed_count, days);
    let score = compute_score(closed_count, days);

    let days_str = days
        .map(|d| d.normalize().to_string())
        .unwrap_or_else(|| "none".to_string());

    let reasoning = match rule {
        ScoreRule::NoClosures => "No closed requisitions - score is 0".to_string(),
        ScoreRule::DegenerateDays => format!(
            "{} closed with average days {} - {} x {} = {}",
            closed_count,
            days_str,
            closed_count,
            DEGENERATE_DAYS_MULTIPLIER,
            score.normalize()
        ),
        ScoreRule::Ratio => format!(
            "{} / {} x {} = {}",
            closed_count,
            days_str,
            RATIO_SCALE,
            score.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "productivity_index".to_string(),
        rule_name: "Productivity Index".to_string(),
        input: serde_json::json!({
            "identifier": aggregate.identifier,
            "closed_count": closed_count,
            "average_days_to_close": days.map(|d| d.normalize().to_string())
        }),
        output: serde_json::json!({
            "score": score.normalize().to_string(),
            "rule": rule
        }),
        reasoning,
    };

    ProductivityIndexResult {
        score,
        rule,
        audit_step,
    }
}
