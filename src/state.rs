//! Shared state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::GeocodeService;

#[derive(Clone)]
pub struct AppState {
    pub geocode_service: Arc<GeocodeService>,
    /// Deadline applied to each geocoding request.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(geocode_service: Arc<GeocodeService>, request_timeout: Duration) -> Self {
        Self {
            geocode_service,
            request_timeout,
        }
    }
}
