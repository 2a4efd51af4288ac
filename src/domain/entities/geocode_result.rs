//! Geocoding result entity returned to callers and stored in the cache.

use serde::Serialize;

/// Where a [`GeocodeResult`] was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Cache,
    Upstream,
}

impl ResultSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Upstream => "upstream",
        }
    }
}

/// Coordinates resolved for an address.
///
/// Values are immutable once constructed. The `source` field describes how a
/// particular response was obtained and is not part of the cached identity:
/// entries are stored with [`ResultSource::Upstream`] and re-labelled by the
/// service on a cache hit via [`GeocodeResult::with_source`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub source: ResultSource,
}

impl GeocodeResult {
    /// Creates a result freshly obtained from the upstream provider.
    pub fn upstream(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
            source: ResultSource::Upstream,
        }
    }

    /// Returns a copy of this result labelled with a different source.
    pub fn with_source(&self, source: ResultSource) -> Self {
        Self {
            source,
            ..self.clone()
        }
    }
}
