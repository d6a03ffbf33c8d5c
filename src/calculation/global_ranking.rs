//! Global recruiter ranking.
//!
//! This module turns a collection of [`RecruiterAggregate`] values into an
//! ordered list of [`RankedRecruiter`] entries with dense 1-based positions.
//!
//! Entries are ordered by:
//!
//! 1. score, highest first;
//! 2. closed count, highest first;
//! 3. average days to close, lowest first (a missing average counts as zero,
//!    and the average is ignored for recruiters with no closures);
//! 4. position in the input, earliest first.
//!
//! The last criterion makes the order fully deterministic, so no two entries
//! ever share a position.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::models::{AuditStep, RankedRecruiter, RecruiterAggregate};

use super::productivity_index::calculate_productivity_index;

/// The result of building a ranking, including the audit steps.
#[derive(Debug, Clone)]
pub struct GlobalRankingResult {
    /// Ranked entries, ordered by position.
    pub entries: Vec<RankedRecruiter>,
    /// One productivity index step per input entry, then the ordering step.
    pub audit_steps: Vec<AuditStep>,
}

/// Compares two ranked entries by score, closed count and average days.
///
/// Entries that tie on all three compare equal. A stable sort of
/// [`build_ranking`] output with this comparator leaves the order unchanged.
///
/// # Example
///
/// ```
/// use ranking_engine::calculation::{build_ranking, compare_ranked};
/// use ranking_engine::models::RecruiterAggregate;
/// use rust_decimal::Decimal;
///
/// let ranking = build_ranking(&[
///     RecruiterAggregate::new("a", "A", 5, Some(Decimal::from(10))).unwrap(),
///     RecruiterAggregate::new("b", "B", 10, Some(Decimal::from(5))).unwrap(),
/// ]);
/// assert!(ranking.windows(2).all(|w| compare_ranked(&w[0], &w[1]).is_le()));
/// ```
pub fn compare_ranked(a: &RankedRecruiter, b: &RankedRecruiter) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.recruiter.closed_count.cmp(&a.recruiter.closed_count))
        .then_with(|| ordering_days(&a.recruiter).cmp(&ordering_days(&b.recruiter)))
}

fn ordering_days(recruiter: &RecruiterAggregate) -> Decimal {
    if recruiter.closed_count == 0 {
        Decimal::ZERO
    } else {
        recruiter.effective_days()
    }
}

/// Builds the global ranking for a collection of recruiters.
///
/// The input is left untouched; a new vector is returned.
///
/// # Examples
///
/// ```
/// use ranking_engine::calculation::build_ranking;
/// use ranking_engine::models::RecruiterAggregate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     RecruiterAggregate::new("rec_001", "Ana", 5, Some(Decimal::from(10))).unwrap(),
///     RecruiterAggregate::new("rec_002", "Luis", 10, Some(Decimal::from(5))).unwrap(),
/// ];
///
/// let ranking = build_ranking(&entries);
/// assert_eq!(ranking[0].recruiter.identifier, "rec_002");
/// assert_eq!(ranking[0].position, 1);
/// assert_eq!(ranking[1].score, Decimal::from(50));
/// assert_eq!(ranking[1].position, 2);
/// ```
pub fn build_ranking(entries: &[RecruiterAggregate]) -> Vec<RankedRecruiter> {
    calculate_global_ranking(entries, 1).entries
}

/// Builds the global ranking and records every scoring decision.
///
/// # Arguments
///
/// * `entries` - The recruiters to rank
/// * `first_step_number` - The step number of the first audit step
pub fn calculate_global_ranking(
    entries: &[RecruiterAggregate],
    first_step_number: u32,
) -> GlobalRankingResult {
    let mut step_number = first_step_number;
    let mut audit_steps = Vec::with_capacity(entries.len() + 1);

    let mut scored: Vec<(usize, RankedRecruiter)> = entries
        .iter()
        .enumerate()
        .map(|(input_index, aggregate)| {
            let result = calculate_productivity_index(aggregate, step_number);
            audit_steps.push(result.audit_step);
            step_number += 1;

            let entry = RankedRecruiter {
                recruiter: aggregate.clone(),
                score: result.score,
                score_rule: result.rule,
                position: 0,
            };
            (input_index, entry)
        })
        .collect();

    scored.sort_by(|(ia, a), (ib, b)| compare_ranked(a, b).then_with(|| ia.cmp(ib)));

    let ranked: Vec<RankedRecruiter> = scored
        .into_iter()
        .enumerate()
        .map(|(index, (_, mut entry))| {
            entry.position = index as u32 + 1;
            entry
        })
        .collect();

    let order: Vec<&str> = ranked
        .iter()
        .map(|e| e.recruiter.identifier.as_str())
        .collect();

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "global_ranking".to_string(),
        rule_name: "Global Ranking".to_string(),
        input: serde_json::json!({
            "entries": entries.len()
        }),
        output: serde_json::json!({
            "order": order
        }),
        reasoning: format!(
            "Ranked {} recruiters by score desc, closed count desc, average days asc, input order",
            entries.len()
        ),
    });

    GlobalRankingResult {
        entries: ranked,
        audit_steps,
    }
}
