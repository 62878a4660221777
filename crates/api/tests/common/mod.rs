use std::sync::Arc;

use assetgate_core::assets::store::MemoryAssetStore;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use assetgate_api::config::{ServerConfig, ValidationConfig, ValidationMode};
use assetgate_api::router::build_app_router;
use assetgate_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the given validation mode.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(mode: ValidationMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        validation: ValidationConfig {
            mode,
            ..ValidationConfig::default()
        },
    }
}

/// Build the full application router over an empty in-memory store.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(mode: ValidationMode) -> Router {
    let config = test_config(mode);
    let state = AppState::new(config.clone(), Arc::new(MemoryAssetStore::new()));
    build_app_router(state, &config)
}

/// Send a GET request to the given URI.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, optionally as the given caller.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    auth: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
