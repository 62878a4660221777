//! Handlers for the `/assets` resource.
//!
//! Validation happens either in the extractors or in the interceptor wrapped
//! around [`AssetResource`](assetgate_core::assets::resource::AssetResource);
//! handlers only pass the caller context through.

use assetgate_core::assets::constraints::KeyFilter;
use assetgate_core::assets::request::AssetCreateRequest;
use assetgate_core::assets::response::AssetResponse;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{CheckedJson, CheckedQuery};
use crate::middleware::caller::Caller;
use crate::state::AppState;

/// GET /api/v1/assets?key=
///
/// List assets, optionally filtered by key. A non-blank key must be a valid
/// asset key.
pub async fn list_assets(
    Caller(ctx): Caller,
    State(state): State<AppState>,
    CheckedQuery(filter): CheckedQuery<KeyFilter>,
) -> AppResult<Json<Vec<AssetResponse>>> {
    let assets = state.assets.list(Some(&ctx), filter)?;
    Ok(Json(assets))
}

/// POST /api/v1/assets
///
/// Create an asset. The caller's credential picks the rule group.
pub async fn create_asset(
    Caller(ctx): Caller,
    State(state): State<AppState>,
    CheckedJson(request): CheckedJson<AssetCreateRequest>,
) -> AppResult<Json<AssetResponse>> {
    let asset = state.assets.create(Some(&ctx), request)?;
    Ok(Json(asset))
}
