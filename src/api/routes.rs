//! API route configuration.

use crate::api::handlers::{geocode_handler, health_handler, method_not_allowed_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{any, get},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /geocode?address=...` - Resolve an address to coordinates
/// - `ANY /healthz`             - Liveness and cache status
///
/// Other methods on `/geocode` receive a JSON `405 Method Not Allowed` with an
/// `Allow` header.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/geocode", get(geocode_handler))
        .route("/healthz", any(health_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
}
