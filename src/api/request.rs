//! Request types for the Recruiter Ranking Engine API.
//!
//! This module defines the JSON request structures for the `/ranking`
//! endpoints. Numbers arrive loosely typed and are validated when converted
//! into domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{RecruiterAggregate, Requisition};

/// Request body for the `/ranking` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRequest {
    /// Pre-aggregated recruiter totals to rank.
    pub recruiters: Vec<RecruiterAggregateRequest>,
}

/// A recruiter aggregate as sent by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruiterAggregateRequest {
    /// Opaque identifier, unique per recruiter.
    pub identifier: String,
    /// Name shown in the ranking table.
    pub display_name: String,
    /// Number of closed requisitions. Must not be negative.
    pub closed_count: i64,
    /// Mean days to close. Must be finite and not negative when present.
    #[serde(default)]
    pub average_days_to_close: Option<f64>,
}

/// Request body for the `/ranking/requisitions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequisitionRankingRequest {
    /// Raw requisition rows to aggregate and rank.
    pub requisitions: Vec<RequisitionRequest>,
}

/// A requisition row as sent by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequisitionRequest {
    /// Unique identifier for the requisition.
    pub id: String,
    /// The assigned recruiter, if any.
    #[serde(default)]
    pub recruiter_id: Option<String>,
    /// The assigned recruiter's display name, if known.
    #[serde(default)]
    pub recruiter_name: Option<String>,
    /// Lifecycle status as stored upstream.
    pub status: String,
    /// The date the requisition was requested.
    #[serde(default)]
    pub request_date: Option<NaiveDate>,
    /// The date the requisition was closed.
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
}

impl TryFrom<RecruiterAggregateRequest> for RecruiterAggregate {
    type Error = EngineError;

    fn try_from(req: RecruiterAggregateRequest) -> Result<Self, Self::Error> {
        RecruiterAggregate::from_raw(
            req.identifier,
            req.display_name,
            req.closed_count,
            req.average_days_to_close,
        )
    }
}

impl From<RequisitionRequest> for Requisition {
    fn from(req: RequisitionRequest) -> Self {
        Requisition {
            id: req.id,
            recruiter_id: req.recruiter_id,
            recruiter_name: req.recruiter_name,
            status: req.status,
            request_date: req.request_date,
            close_date: req.close_date,
        }
    }
}
