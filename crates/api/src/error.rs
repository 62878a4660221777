use assetgate_core::error::CoreError;
use assetgate_core::validation::rules::Violation;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// `{ "code", "detail" }`, plus `violations` for collect-all failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `assetgate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut violations: Option<Vec<&Violation>> = None;

        let (status, code, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Rule(rule) => (StatusCode::BAD_REQUEST, rule.code(), rule.to_string()),
                CoreError::Constraint(set) => {
                    violations = Some(set.sorted());
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", set.detail())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "code": code,
            "detail": detail,
        });
        if let Some(violations) = violations {
            body["violations"] = json!(violations);
        }

        (status, axum::Json(body)).into_response()
    }
}
