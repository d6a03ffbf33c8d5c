//! HTTP request handlers for the Recruiter Ranking Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_requisitions, calculate_global_ranking};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, AuditWarning, RankingReport, RecruiterAggregate, Requisition, ScoreRule,
};

use super::request::{RankingRequest, RequisitionRankingRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ranking", post(ranking_handler))
        .route("/ranking/requisitions", post(requisition_ranking_handler))
        .with_state(state)
}

/// Handler for POST /ranking.
///
/// Ranks pre-aggregated recruiter totals.
async fn ranking_handler(
    State(state): State<AppState>,
    payload: Result<Json<RankingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ranking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let aggregates: EngineResult<Vec<RecruiterAggregate>> = request
        .recruiters
        .into_iter()
        .map(RecruiterAggregate::try_from)
        .collect();

    match aggregates {
        Ok(aggregates) => ranking_response(correlation_id, &aggregates, state.config()),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid recruiter aggregate");
            error_response(err.into())
        }
    }
}

/// Handler for POST /ranking/requisitions.
///
/// Aggregates raw requisitions by recruiter, then ranks the result.
async fn requisition_ranking_handler(
    State(state): State<AppState>,
    payload: Result<Json<RequisitionRankingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing requisition ranking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let requisitions: Vec<Requisition> = request.requisitions.into_iter().map(Into::into).collect();
    let config = state.config();

    match aggregate_requisitions(&requisitions, config.statuses()) {
        Ok(aggregates) => {
            info!(
                correlation_id = %correlation_id,
                requisitions_count = requisitions.len(),
                recruiters_count = aggregates.len(),
                "Requisitions aggregated"
            );
            ranking_response(correlation_id, &aggregates, config)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Aggregation failed");
            error_response(err.into())
        }
    }
}

fn ranking_response(
    correlation_id: Uuid,
    aggregates: &[RecruiterAggregate],
    config: &ConfigLoader,
) -> Response {
    let report = perform_ranking(aggregates, config);

    info!(
        correlation_id = %correlation_id,
        ranking_id = %report.ranking_id,
        recruiters_count = report.entries.len(),
        warnings_count = report.audit_trace.warnings.len(),
        duration_us = report.audit_trace.duration_us,
        "Ranking completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Ranks the aggregates and wraps the result in an audited report.
fn perform_ranking(aggregates: &[RecruiterAggregate], config: &ConfigLoader) -> RankingReport {
    let start_time = Instant::now();

    let ranking = calculate_global_ranking(aggregates, 1);

    let warnings: Vec<AuditWarning> = ranking
        .entries
        .iter()
        .filter(|entry| entry.score_rule == ScoreRule::DegenerateDays)
        .map(|entry| match entry.recruiter.average_days_to_close {
            None => AuditWarning {
                code: "MISSING_AVERAGE_DAYS".to_string(),
                message: format!(
                    "Recruiter '{}' has {} closed requisitions but no average days to close",
                    entry.recruiter.identifier, entry.recruiter.closed_count
                ),
                severity: "medium".to_string(),
            },
            Some(_) => AuditWarning {
                code: "ZERO_AVERAGE_DAYS".to_string(),
                message: format!(
                    "Recruiter '{}' has an average of 0 days to close",
                    entry.recruiter.identifier
                ),
                severity: "low".to_string(),
            },
        })
        .collect();

    RankingReport {
        ranking_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: config.engine().version.clone(),
        entries: ranking.entries,
        audit_trace: AuditTrace {
            steps: ranking.audit_steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
