//! Requisition model.
//!
//! A [`Requisition`] is a job opening row as returned by the hosted data
//! backend. Only the fields the ranking needs are modelled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A job requisition tracked through its lifecycle.
///
/// # Example
///
/// ```
/// use ranking_engine::models::Requisition;
/// use chrono::NaiveDate;
///
/// let requisition = Requisition {
///     id: "req_001".to_string(),
///     recruiter_id: Some("rec_001".to_string()),
///     recruiter_name: Some("Ana".to_string()),
///     status: "closed".to_string(),
///     request_date: NaiveDate::from_ymd_opt(2026, 3, 1),
///     close_date: NaiveDate::from_ymd_opt(2026, 3, 11),
/// };
/// assert_eq!(requisition.days_to_close(), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requisition {
    /// Unique identifier for the requisition.
    pub id: String,
    /// The recruiter assigned to the requisition, if any.
    #[serde(default)]
    pub recruiter_id: Option<String>,
    /// The assigned recruiter's display name, if known.
    #[serde(default)]
    pub recruiter_name: Option<String>,
    /// Lifecycle status as stored upstream (e.g. "open", "closed", "cancelled").
    pub status: String,
    /// The date the requisition was requested.
    #[serde(default)]
    pub request_date: Option<NaiveDate>,
    /// The date the requisition was closed.
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
}

impl Requisition {
    /// Returns the whole days between request and close, when both dates are set.
    ///
    /// The value is negative when the close date precedes the request date.
    pub fn days_to_close(&self) -> Option<i64> {
        match (self.request_date, self.close_date) {
            (Some(requested), Some(closed)) => {
                Some(closed.signed_duration_since(requested).num_days())
            }
            _ => None,
        }
    }
}
