//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /geocode?address=...` - Address lookup
//! - `GET /healthz`             - Liveness and cache status
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Optional per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::middleware::tracing;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP inbound limit; `None` disables rate limiting.
///   When enabled, the router must be served with connect info.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(
    state: AppState,
    rate_limit: Option<RateLimit>,
) -> Result<NormalizePath<Router>> {
    let mut api_router = api::routes::public_routes();
    if let Some(limit) = rate_limit {
        api_router = api_router.layer(rate_limit::layer(limit)?);
    }

    let router = api_router.with_state(state).layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
