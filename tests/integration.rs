//! Integration tests for the Recruiter Ranking Engine.
//!
//! This test suite covers:
//! - Productivity index scenarios through the HTTP API
//! - Tie-break ordering
//! - Ranking from raw requisitions
//! - Audit trace contents
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use ranking_engine::api::{AppState, create_router};
use ranking_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(uri, body.to_string()).await
}

async fn post_raw(uri: &str, body: String) -> (StatusCode, Value) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn recruiter(identifier: &str, closed_count: i64, days: Value) -> Value {
    json!({
        "identifier": identifier,
        "display_name": format!("Recruiter {}", identifier),
        "closed_count": closed_count,
        "average_days_to_close": days
    })
}

async fn rank(recruiters: Vec<Value>) -> Value {
    let (status, result) = post("/ranking", json!({ "recruiters": recruiters })).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", result);
    result
}

fn score_of(entry: &Value) -> String {
    normalize_decimal(entry["score"].as_str().unwrap())
}

fn identifiers(result: &Value) -> Vec<String> {
    result["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["identifier"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: Productivity index
// =============================================================================

#[tokio::test]
async fn test_literal_score_vectors() {
    let cases = [
        (10, json!(5), "200"),
        (5, json!(10), "50"),
        (1, json!(1), "100"),
        (7, json!(3), "233.33"),
        (1, json!(7), "14.29"),
        (0, json!(10), "0"),
        (0, Value::Null, "0"),
        (5, json!(0), "50000"),
        (3, Value::Null, "30000"),
    ];

    for (closed, days, expected) in cases {
        let result = rank(vec![recruiter("rec", closed, days.clone())]).await;
        let entry = &result["entries"][0];
        assert_eq!(
            score_of(entry),
            expected,
            "closed={} days={}",
            closed,
            days
        );
    }
}

#[tokio::test]
async fn test_score_rule_is_reported() {
    let result = rank(vec![
        recruiter("ratio", 2, json!(4)),
        recruiter("degenerate", 1, Value::Null),
        recruiter("idle", 0, json!(3)),
    ])
    .await;

    let rule_by_id: Vec<(String, String)> = result["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["identifier"].as_str().unwrap().to_string(),
                e["score_rule"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        rule_by_id,
        vec![
            ("degenerate".to_string(), "degenerate_days".to_string()),
            ("ratio".to_string(), "ratio".to_string()),
            ("idle".to_string(), "no_closures".to_string()),
        ]
    );
}

// =============================================================================
// SECTION 2: Ranking order
// =============================================================================

#[tokio::test]
async fn test_two_entries_ranked_by_score() {
    let result = rank(vec![
        recruiter("first", 10, json!(5)),
        recruiter("second", 5, json!(10)),
    ])
    .await;

    let entries = result["entries"].as_array().unwrap();
    assert_eq!(entries[0]["identifier"], "first");
    assert_eq!(score_of(&entries[0]), "200");
    assert_eq!(entries[0]["position"], 1);
    assert_eq!(entries[1]["identifier"], "second");
    assert_eq!(score_of(&entries[1]), "50");
    assert_eq!(entries[1]["position"], 2);
}

#[tokio::test]
async fn test_score_tie_broken_by_closed_count() {
    let result = rank(vec![
        recruiter("five", 5, json!(2.5)),
        recruiter("ten", 10, json!(5)),
    ])
    .await;

    assert_eq!(identifiers(&result), vec!["ten", "five"]);
    assert_eq!(result["entries"][0]["position"], 1);
}

#[tokio::test]
async fn test_full_tie_preserves_input_order() {
    let result = rank(vec![
        recruiter("c", 2, json!(2)),
        recruiter("a", 2, json!(2)),
        recruiter("b", 2, json!(2)),
    ])
    .await;

    assert_eq!(identifiers(&result), vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_empty_ranking() {
    let result = rank(vec![]).await;
    assert_eq!(result["entries"], json!([]));
}

#[tokio::test]
async fn test_single_entry() {
    let result = rank(vec![recruiter("solo", 5, json!(5))]).await;

    let entries = result["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(score_of(&entries[0]), "100");
    assert_eq!(entries[0]["position"], 1);
}

#[tokio::test]
async fn test_positions_are_contiguous() {
    let recruiters: Vec<Value> = (0..25)
        .map(|i| recruiter(&format!("rec_{:02}", i), i % 7, json!((i % 4) as f64 * 1.5)))
        .collect();

    let result = rank(recruiters).await;
    let positions: Vec<u64> = result["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["position"].as_u64().unwrap())
        .collect();

    assert_eq!(positions, (1..=25).collect::<Vec<u64>>());
}

// =============================================================================
// SECTION 3: Ranking from requisitions
// =============================================================================

fn requisition(id: &str, recruiter_id: &str, status: &str, request: &str, close: Value) -> Value {
    json!({
        "id": id,
        "recruiter_id": recruiter_id,
        "recruiter_name": recruiter_id.to_uppercase(),
        "status": status,
        "request_date": request,
        "close_date": close
    })
}

#[tokio::test]
async fn test_requisitions_are_aggregated_then_ranked() {
    let body = json!({
        "requisitions": [
            requisition("r1", "ana", "cerrada", "2026-01-01", json!("2026-01-11")),
            requisition("r2", "ana", "cerrada", "2026-01-01", json!("2026-01-21")),
            requisition("r3", "ana", "abierta", "2026-01-05", Value::Null),
            requisition("r4", "luis", "closed", "2026-02-01", json!("2026-02-03")),
            requisition("r5", "eva", "cancelada", "2026-02-01", json!("2026-02-02")),
            {"id": "r6", "status": "cerrada"}
        ]
    });

    let (status, result) = post("/ranking/requisitions", body).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", result);

    let entries = result["entries"].as_array().unwrap();
    assert_eq!(identifiers(&result), vec!["luis", "ana", "eva"]);

    // luis: 1 closed in 2 days -> 50
    assert_eq!(score_of(&entries[0]), "50");
    assert_eq!(entries[0]["display_name"], "LUIS");
    // ana: 2 closed, average 15 days -> 13.33
    assert_eq!(entries[1]["closed_count"], 2);
    assert_eq!(
        normalize_decimal(entries[1]["average_days_to_close"].as_str().unwrap()),
        "15"
    );
    assert_eq!(score_of(&entries[1]), "13.33");
    // eva: cancelled only
    assert_eq!(entries[2]["closed_count"], 0);
    assert_eq!(score_of(&entries[2]), "0");
}

#[tokio::test]
async fn test_closed_before_requested_is_rejected() {
    let body = json!({
        "requisitions": [
            requisition("r_bad", "ana", "cerrada", "2026-03-10", json!("2026-03-01"))
        ]
    });

    let (status, result) = post("/ranking/requisitions", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_REQUISITION");
    assert!(result["message"].as_str().unwrap().contains("r_bad"));
}

// =============================================================================
// SECTION 4: Audit trace
// =============================================================================

#[tokio::test]
async fn test_report_metadata_and_audit_trace() {
    let result = rank(vec![
        recruiter("a", 3, Value::Null),
        recruiter("b", 4, json!(2)),
    ])
    .await;

    assert!(result["ranking_id"].as_str().is_some());
    assert!(result["timestamp"].as_str().is_some());
    assert_eq!(result["engine_version"], "0.1.0");

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["rule_id"], "productivity_index");
    assert_eq!(steps[0]["step_number"], 1);
    assert_eq!(steps[2]["rule_id"], "global_ranking");
    assert_eq!(steps[2]["output"]["order"], json!(["a", "b"]));

    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "MISSING_AVERAGE_DAYS");
}

// =============================================================================
// SECTION 5: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, result) = post_raw("/ranking", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let body = json!({
        "recruiters": [{"identifier": "rec_001", "closed_count": 1}]
    });

    let (status, result) = post("/ranking", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("display_name"));
}

#[tokio::test]
async fn test_negative_closed_count_returns_invalid_aggregate() {
    let (status, result) = post(
        "/ranking",
        json!({ "recruiters": [recruiter("rec_neg", -3, json!(2))] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_AGGREGATE");
    assert!(result["message"].as_str().unwrap().contains("rec_neg"));
}

#[tokio::test]
async fn test_negative_average_returns_invalid_aggregate() {
    let (status, result) = post(
        "/ranking",
        json!({ "recruiters": [recruiter("rec_neg", 3, json!(-2.5))] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_AGGREGATE");
    assert!(
        result["message"]
            .as_str()
            .unwrap()
            .contains("average_days_to_close")
    );
}

#[tokio::test]
async fn test_average_below_decimal_precision_returns_invalid_aggregate() {
    let (status, result) = post(
        "/ranking",
        json!({ "recruiters": [recruiter("rec_tiny", 1, json!(1e-30))] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_AGGREGATE");
    assert!(result["message"].as_str().unwrap().contains("too small"));
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ranking")
                .body(Body::from(json!({"recruiters": []}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}
