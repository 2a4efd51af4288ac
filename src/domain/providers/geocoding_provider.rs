//! Port for the external geocoding provider.

use async_trait::async_trait;

/// Single match returned by the provider, in the provider's relevance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Decoded provider answer, before any interpretation of `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub status: String,
    pub error_message: Option<String>,
    pub candidates: Vec<Candidate>,
}

impl ProviderResponse {
    pub const STATUS_OK: &'static str = "OK";

    /// Successful response carrying `candidates`.
    pub fn ok(candidates: Vec<Candidate>) -> Self {
        Self {
            status: Self::STATUS_OK.to_string(),
            error_message: None,
            candidates,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Self::STATUS_OK
    }
}

/// Transport-level failures of a provider call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("geocoding request failed: {0}")]
    Transport(String),

    #[error("geocoding request timed out")]
    Timeout,

    #[error("geocoding provider returned status {0}")]
    Status(u16),

    #[error("invalid geocoding response: {0}")]
    Decode(String),
}

/// Geocoding provider reachable over the network.
///
/// Implementations move bytes only: they issue one request per call and
/// decode the payload. Interpreting the provider `status`, picking the first
/// candidate and caching are the service's job.
///
/// # Implementations
///
/// - [`crate::infrastructure::geocoding::GoogleGeocodingClient`] - Google Maps Geocoding API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Looks up an already-normalized address.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the request cannot be completed or the
    /// payload cannot be decoded. A decoded non-"OK" status is not an error
    /// at this level.
    async fn lookup(&self, address: &str) -> Result<ProviderResponse, ProviderError>;
}
