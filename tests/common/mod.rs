#![allow(dead_code)]

use async_trait::async_trait;
use geocode_service::application::services::GeocodeService;
use geocode_service::domain::providers::{
    Candidate, GeocodingProvider, ProviderError, ProviderResponse,
};
use geocode_service::infrastructure::cache::{CacheService, MemoryCache};
use geocode_service::state::AppState;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Provider returning a canned outcome, optionally after a delay, and
/// recording every address it was asked for.
pub struct StubProvider {
    outcome: Result<ProviderResponse, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    addresses: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(outcome: Result<ProviderResponse, ProviderError>) -> Self {
        Self {
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
            addresses: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.addresses.lock().clone()
    }
}

#[async_trait]
impl GeocodingProvider for StubProvider {
    async fn lookup(&self, address: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.addresses.lock().push(address.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcome.clone()
    }
}

pub fn infinite_loop() -> ProviderResponse {
    ProviderResponse::ok(vec![Candidate {
        formatted_address: "1 Infinite Loop".to_string(),
        latitude: 37.33,
        longitude: -122.03,
    }])
}

pub fn create_test_state(provider: Arc<StubProvider>) -> (AppState, Arc<MemoryCache>) {
    create_test_state_with_timeout(provider, Duration::from_secs(3))
}

pub fn create_test_state_with_timeout(
    provider: Arc<StubProvider>,
    request_timeout: Duration,
) -> (AppState, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::new(Duration::from_secs(30 * 60)));
    let service = GeocodeService::new(provider, cache.clone() as Arc<dyn CacheService>);

    (AppState::new(Arc::new(service), request_timeout), cache)
}
