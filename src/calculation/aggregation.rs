//! Requisition aggregation.
//!
//! Groups raw requisition rows by recruiter and derives the closed count and
//! average days to close that the productivity index is computed from.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::StatusConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{RecruiterAggregate, Requisition};

#[derive(Debug)]
struct RecruiterTally {
    identifier: String,
    display_name: Option<String>,
    closed_count: u32,
    dated_closures: u32,
    total_days: i64,
}

/// Aggregates requisitions into one [`RecruiterAggregate`] per recruiter.
///
/// - Requisitions without a recruiter are skipped.
/// - Recruiters appear in the order they are first seen.
/// - A requisition counts as closed when its status is listed in `statuses`.
/// - The average covers closed requisitions carrying both dates; the rest
///   still count as closed but do not contribute to the average.
///
/// # Errors
///
/// Returns `InvalidRequisition` if a closed requisition's close date precedes
/// its request date.
///
/// # Examples
///
/// ```
/// use ranking_engine::calculation::aggregate_requisitions;
/// use ranking_engine::config::StatusConfig;
/// use ranking_engine::models::Requisition;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let statuses = StatusConfig { closed: vec!["closed".to_string()] };
/// let requisitions = vec![Requisition {
///     id: "req_001".to_string(),
///     recruiter_id: Some("rec_001".to_string()),
///     recruiter_name: Some("Ana".to_string()),
///     status: "closed".to_string(),
///     request_date: NaiveDate::from_ymd_opt(2026, 3, 1),
///     close_date: NaiveDate::from_ymd_opt(2026, 3, 5),
/// }];
///
/// let aggregates = aggregate_requisitions(&requisitions, &statuses).unwrap();
/// assert_eq!(aggregates[0].closed_count, 1);
/// assert_eq!(aggregates[0].average_days_to_close, Some(Decimal::from(4)));
/// ```
pub fn aggregate_requisitions(
    requisitions: &[Requisition],
    statuses: &StatusConfig,
) -> EngineResult<Vec<RecruiterAggregate>> {
    let mut tallies: Vec<RecruiterTally> = Vec::new();
    let mut index_by_recruiter: HashMap<&str, usize> = HashMap::new();

    for requisition in requisitions {
        let Some(recruiter_id) = requisition.recruiter_id.as_deref() else {
            debug!(requisition_id = %requisition.id, "Skipping unassigned requisition");
            continue;
        };

        let index = *index_by_recruiter.entry(recruiter_id).or_insert_with(|| {
            tallies.push(RecruiterTally {
                identifier: recruiter_id.to_string(),
                display_name: None,
                closed_count: 0,
                dated_closures: 0,
                total_days: 0,
            });
            tallies.len() - 1
        });
        let tally = &mut tallies[index];

        if tally.display_name.is_none() {
            tally.display_name = requisition
                .recruiter_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
        }

        if !statuses.is_closed(&requisition.status) {
            continue;
        }

        tally.closed_count += 1;

        match requisition.days_to_close() {
            Some(days) if days < 0 => {
                return Err(EngineError::InvalidRequisition {
                    requisition_id: requisition.id.clone(),
                    message: format!("close date precedes request date by {} days", -days),
                });
            }
            Some(days) => {
                tally.dated_closures += 1;
                tally.total_days += days;
            }
            None => {
                debug!(
                    requisition_id = %requisition.id,
                    recruiter_id = %recruiter_id,
                    "Closed requisition missing a date, excluded from average"
                );
            }
        }
    }

    tallies
        .into_iter()
        .map(|tally| {
            let average_days_to_close = if tally.dated_closures == 0 {
                None
            } else {
                Some(Decimal::from(tally.total_days) / Decimal::from(tally.dated_closures))
            };
            let display_name = tally
                .display_name
                .unwrap_or_else(|| tally.identifier.clone());

            RecruiterAggregate::new(
                tally.identifier,
                display_name,
                tally.closed_count,
                average_days_to_close,
            )
        })
        .collect()
}
