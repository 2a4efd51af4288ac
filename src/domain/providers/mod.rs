//! Outbound port definitions.
//!
//! Traits in this module are implemented by the infrastructure layer.
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod geocoding_provider;

#[cfg(test)]
pub use geocoding_provider::MockGeocodingProvider;
pub use geocoding_provider::{Candidate, GeocodingProvider, ProviderError, ProviderResponse};
