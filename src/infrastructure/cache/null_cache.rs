//! No-op cache implementation for disabled caching.

use super::service::CacheService;
use crate::domain::entities::GeocodeResult;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is disabled through `CACHE_ENABLED=false`. Every lookup
/// misses, so each request goes upstream.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheService for NullCache {
    fn get(&self, _key: &str) -> Option<GeocodeResult> {
        None
    }

    fn set(&self, _key: &str, _value: GeocodeResult) {}

    fn len(&self) -> usize {
        0
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
