//! Log output of the two validation executors.
//!
//! Captures the formatted `tracing` output of a single request and checks
//! which executor reported the rejection.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use assetgate_api::config::ValidationMode;
use axum::http::StatusCode;
use common::post_json;
use serde_json::json;

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Send `{}` to `POST /api/v1/assets` and return the captured log text.
async fn logs_for_empty_body(mode: ValidationMode) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = common::build_test_app(mode);
    let response = post_json(app, "/api/v1/assets", json!({}), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Test: the interceptor logs a critical violation at error level
// ---------------------------------------------------------------------------

#[tokio::test]
async fn interceptor_logs_critical_violation() {
    let logs = logs_for_empty_body(ValidationMode::Interceptor).await;

    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("critical violation"), "{logs}");
    assert!(!logs.contains("Request input rejected"), "{logs}");
}

// ---------------------------------------------------------------------------
// Test: the extractor logs a warning and the interceptor stays silent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extractor_logs_rejected_input_as_warning() {
    let logs = logs_for_empty_body(ValidationMode::Extractor).await;

    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("Request input rejected"), "{logs}");
    assert!(!logs.contains("critical violation"), "{logs}");
}
