//! Cache service trait.

use crate::domain::entities::GeocodeResult;

/// Trait for memoizing successful geocoding lookups.
///
/// Implementations are internally synchronized: callers share them behind an
/// `Arc` and never lock anything themselves. Operations never fail; absence is
/// reported as `None`.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map with fixed TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
pub trait CacheService: Send + Sync {
    /// Returns the value stored under `key` if present and not yet expired.
    ///
    /// An expired entry observed here is removed before returning `None`.
    fn get(&self, key: &str) -> Option<GeocodeResult>;

    /// Stores `value` under `key`, replacing any existing entry.
    ///
    /// The entry expires one TTL after this call.
    fn set(&self, key: &str, value: GeocodeResult);

    /// Number of stored entries, including expired ones not yet observed.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether values written through [`CacheService::set`] can ever be read back.
    fn is_enabled(&self) -> bool {
        true
    }
}
