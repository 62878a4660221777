//! Body and query extractors with switchable validation.
//!
//! [`CheckedJson`] and [`CheckedQuery`] parse exactly like Axum's `Json` and
//! `Query` (same content-type and syntax checks, same rejections mapped to
//! 400). They additionally validate the parsed value under the caller's rule
//! group, but only when no method validation interceptor is installed on the
//! asset resource. With the interceptor installed, validation is skipped here
//! so each request is evaluated by exactly one executor.

use assetgate_core::validation::constrained::{collect, Constrained};
use assetgate_core::validation::group::CallContext;
use assetgate_core::validation::rules::ViolationTarget;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::middleware::caller::call_context;
use crate::state::AppState;

/// JSON request body, validated on extraction when not intercepted.
#[derive(Debug)]
pub struct CheckedJson<T>(pub T);

impl<T> FromRequest<AppState> for CheckedJson<T>
where
    T: DeserializeOwned + Constrained + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let ctx = call_context(req.headers());
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        validate_on_extract(state, "body", &ctx, &value)?;
        Ok(CheckedJson(value))
    }
}

/// Query string, validated on extraction when not intercepted.
#[derive(Debug)]
pub struct CheckedQuery<T>(pub T);

impl<T> FromRequestParts<AppState> for CheckedQuery<T>
where
    T: DeserializeOwned + Constrained + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = call_context(&parts.headers);
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        validate_on_extract(state, "query", &ctx, &value)?;
        Ok(CheckedQuery(value))
    }
}

fn validate_on_extract<T: Constrained>(
    state: &AppState,
    source: &'static str,
    ctx: &CallContext,
    value: &T,
) -> Result<(), AppError> {
    if state.assets.is_intercepted() {
        return Ok(());
    }
    let group = ctx.rule_group();
    let options = state.assets.service().options();
    collect(source, ViolationTarget::Input, group, options, value).map_err(|err| {
        tracing::warn!(source, ?group, detail = %err.detail(), "Request input rejected");
        AppError::Core(err.into())
    })
}
