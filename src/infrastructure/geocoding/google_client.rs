//! Reqwest-backed Google Maps Geocoding client.
//!
//! Owns transport details only: request construction, timeout and HTTP error
//! mapping, and JSON decoding into [`ProviderResponse`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::GeocodeResponseDto;
use crate::domain::providers::{GeocodingProvider, ProviderError, ProviderResponse};

/// Default endpoint of the Google Maps Geocoding API.
pub const DEFAULT_GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Geocoding provider backed by the Google Maps Geocoding API.
pub struct GoogleGeocodingClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl GoogleGeocodingClient {
    /// Builds a client with an explicit transport timeout.
    ///
    /// The transport timeout is a safety net; per-request deadlines are
    /// enforced by the caller's [`crate::domain::request_context::RequestContext`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, api_key: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("geocode-service/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl GeocodingProvider for GoogleGeocodingClient {
    async fn lookup(&self, address: &str) -> Result<ProviderResponse, ProviderError> {
        debug!("Upstream lookup: {}", address);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Geocoding provider returned HTTP {}", status.as_u16());
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        let decoded: GeocodeResponseDto = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(decoded.into())
    }
}

/// Maps reqwest failures, stripping the request URL because it carries the API key.
fn map_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        return ProviderError::Timeout;
    }
    if error.is_decode() {
        return ProviderError::Decode(error.without_url().to_string());
    }
    ProviderError::Transport(error.without_url().to_string())
}
