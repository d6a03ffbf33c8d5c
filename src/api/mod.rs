//! HTTP API module for the Recruiter Ranking Engine.
//!
//! This module provides the REST API endpoints for ranking recruiters,
//! either from pre-aggregated totals or from raw requisition rows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    RankingRequest, RecruiterAggregateRequest, RequisitionRankingRequest, RequisitionRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
