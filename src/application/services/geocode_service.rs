//! Cached geocoding lookup service.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::domain::address::normalize_address;
use crate::domain::entities::{GeocodeResult, ResultSource};
use crate::domain::errors::GeocodeError;
use crate::domain::providers::{GeocodingProvider, ProviderError, ProviderResponse};
use crate::domain::request_context::RequestContext;
use crate::infrastructure::cache::CacheService;

/// Metric names emitted by [`GeocodeService`].
pub mod metric_names {
    pub const CACHE_HITS_TOTAL: &str = "geocode_cache_hits_total";
    pub const CACHE_MISSES_TOTAL: &str = "geocode_cache_misses_total";
    pub const UPSTREAM_REQUESTS_TOTAL: &str = "geocode_upstream_requests_total";
    pub const UPSTREAM_FAILURES_TOTAL: &str = "geocode_upstream_failures_total";
    pub const UPSTREAM_TIMEOUTS_TOTAL: &str = "geocode_upstream_timeouts_total";
}

/// Resolves addresses to coordinates, consulting the cache before the provider.
///
/// Each call makes at most one upstream request and never retries. Concurrent
/// misses for the same address are not coalesced: each issues its own request
/// and the last successful write wins.
pub struct GeocodeService {
    provider: Arc<dyn GeocodingProvider>,
    cache: Arc<dyn CacheService>,
}

impl GeocodeService {
    /// Creates a new geocode service.
    pub fn new(provider: Arc<dyn GeocodingProvider>, cache: Arc<dyn CacheService>) -> Self {
        Self { provider, cache }
    }

    pub fn cache(&self) -> &Arc<dyn CacheService> {
        &self.cache
    }

    /// Resolves `raw_address` to coordinates.
    ///
    /// # Flow
    ///
    /// 1. Normalize the address (trim, lower-case)
    /// 2. On cache hit, return the stored result labelled [`ResultSource::Cache`]
    /// 3. On miss, query the provider within the deadline of `ctx`
    /// 4. Take the first candidate, cache it and return it labelled
    ///    [`ResultSource::Upstream`]
    ///
    /// Failures and empty result sets are never cached.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::AddressRequired`] if the address is blank; no lookup is made
    /// - [`GeocodeError::Timeout`] / [`GeocodeError::Canceled`] if `ctx` fires first
    /// - [`GeocodeError::NoResults`] if the provider matched nothing
    /// - [`GeocodeError::Upstream`] for any other provider failure
    #[instrument(skip(self, ctx, raw_address), fields(address))]
    pub async fn geocode(
        &self,
        ctx: &RequestContext,
        raw_address: &str,
    ) -> Result<GeocodeResult, GeocodeError> {
        let address = normalize_address(raw_address);
        if address.is_empty() {
            return Err(GeocodeError::AddressRequired);
        }
        tracing::Span::current().record("address", address.as_str());

        if let Some(cached) = self.cache.get(&address) {
            debug!("Cache HIT: {}", address);
            metrics::counter!(metric_names::CACHE_HITS_TOTAL).increment(1);
            return Ok(cached.with_source(ResultSource::Cache));
        }

        debug!("Cache MISS: {}", address);
        metrics::counter!(metric_names::CACHE_MISSES_TOTAL).increment(1);
        metrics::counter!(metric_names::UPSTREAM_REQUESTS_TOTAL).increment(1);

        let response = ctx
            .run(self.provider.lookup(&address))
            .await
            .and_then(|outcome| outcome.map_err(map_provider_error))
            .inspect_err(|e| {
                if e.is_deadline() {
                    warn!("Upstream lookup abandoned: {}", e);
                    metrics::counter!(metric_names::UPSTREAM_TIMEOUTS_TOTAL).increment(1);
                } else {
                    warn!("Upstream lookup failed: {}", e);
                    metrics::counter!(metric_names::UPSTREAM_FAILURES_TOTAL).increment(1);
                }
            })?;

        let result = interpret_response(response)?;

        self.cache.set(&address, result.clone());
        debug!("Cache SET: {}", address);

        Ok(result)
    }
}

/// Turns a decoded provider answer into a result, using the first candidate only.
fn interpret_response(response: ProviderResponse) -> Result<GeocodeResult, GeocodeError> {
    if !response.is_ok() {
        let message = match response.error_message {
            Some(message) => format!("geocoding provider error: {message}"),
            None => format!("geocoding provider status: {}", response.status),
        };
        warn!("{}", message);
        return Err(GeocodeError::Upstream(message));
    }

    let top = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeocodeError::NoResults)?;

    Ok(GeocodeResult::upstream(
        top.formatted_address,
        top.latitude,
        top.longitude,
    ))
}

fn map_provider_error(error: ProviderError) -> GeocodeError {
    match error {
        ProviderError::Timeout => GeocodeError::Timeout,
        other => GeocodeError::Upstream(other.to_string()),
    }
}
