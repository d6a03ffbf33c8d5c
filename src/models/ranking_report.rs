//! Ranking report models.
//!
//! This module contains the [`RankingReport`] type returned by the API and
//! the audit structures that record how every score and position was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RankedRecruiter;

/// A single step in the audit trace recording a ranking decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while ranking.
///
/// Warnings flag inputs that were ranked but may deserve a second look,
/// such as closures reported without an average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a ranking.
///
/// # Example
///
/// ```
/// use ranking_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of ranking steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while ranking.
    pub warnings: Vec<AuditWarning>,
    /// The total ranking duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a ranking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Unique identifier for this ranking.
    pub ranking_id: Uuid,
    /// When the ranking was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the ranking.
    pub engine_version: String,
    /// Ranked entries, ordered by position.
    pub entries: Vec<RankedRecruiter>,
    /// Complete audit trace of ranking decisions.
    pub audit_trace: AuditTrace,
}

impl RankingReport {
    /// Returns the entries within the first `podium_size` positions.
    pub fn podium(&self, podium_size: u32) -> impl Iterator<Item = &RankedRecruiter> {
        self.entries.iter().filter(move |e| e.is_podium(podium_size))
    }
}
