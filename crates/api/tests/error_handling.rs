//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and detail. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use assetgate_api::error::AppError;
use assetgate_core::assets::error::RuleViolation;
use assetgate_core::error::CoreError;
use assetgate_core::validation::rules::{ConstraintViolations, Violation, ViolationTarget};
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: a fail-fast rule maps to 400 with the rule's own code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rule_violation_returns_400_with_rule_code() {
    let err = AppError::Core(CoreError::Rule(RuleViolation::WeightTooHeavy));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "WEIGHT_TOO_HEAVY");
    assert_eq!(json["detail"], "The weight of the asset is over 450.");
    assert!(json.get("violations").is_none());
}

// ---------------------------------------------------------------------------
// Test: a collect-all set maps to 400 with violations sorted by path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn constraint_violations_return_400_sorted_by_path() {
    let set = ConstraintViolations::new(
        "create",
        ViolationTarget::Parameters,
        vec![
            Violation::new("key", "not_null", "The asset key must not be null."),
            Violation::new("effectiveDate", "not_null", "The effective date must not be null."),
        ],
    );
    let err = AppError::Core(CoreError::Constraint(set));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["detail"],
        "The effective date must not be null. The asset key must not be null."
    );

    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0]["path"], "effectiveDate");
    assert_eq!(violations[1]["path"], "key");
    assert_eq!(violations[1]["rule"], "not_null");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["detail"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("asset store lock poisoned".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["detail"], "An internal error occurred");
    assert!(
        !json["detail"].as_str().unwrap().contains("poisoned"),
        "Internal error details must not leak to the client"
    );
}
