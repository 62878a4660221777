//! Route definitions for the `/assets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /    -> list_assets  (?key)
/// POST   /    -> create_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(assets::list_assets).post(assets::create_asset))
}
