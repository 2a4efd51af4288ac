//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CacheStatus, HealthResponse};
use crate::state::AppState;

/// Returns service liveness and cache occupancy.
///
/// # Endpoint
///
/// `GET /healthz` (any method is accepted)
///
/// The upstream provider is not probed: a health check must not spend quota.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "cache": { "enabled": true, "entries": 42 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.geocode_service.cache();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache: CacheStatus {
            enabled: cache.is_enabled(),
            entries: cache.len(),
        },
    })
}
