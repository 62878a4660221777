//! Caller credential extractor for Axum handlers.

use std::convert::Infallible;

use assetgate_core::validation::group::CallContext;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

/// The caller of the current request.
///
/// Never rejects: a missing or unreadable `Authorization` header yields an
/// anonymous context, which resolves to the default rule group.
///
/// ```ignore
/// async fn my_handler(Caller(ctx): Caller) -> AppResult<Json<()>> {
///     tracing::info!(group = ?ctx.rule_group(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Caller(pub CallContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller(call_context(&parts.headers)))
    }
}

/// Build a [`CallContext`] from the `Authorization` header.
///
/// The header value is the credential; a `Bearer ` prefix is accepted and
/// stripped.
pub fn call_context(headers: &HeaderMap) -> CallContext {
    let credential = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v).trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    CallContext::new(credential)
}
