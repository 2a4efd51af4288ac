//! In-memory TTL cache.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;
use tracing::debug;

use super::service::CacheService;
use crate::domain::entities::GeocodeResult;

/// Stored value with its absolute expiry.
#[derive(Clone)]
struct CacheEntry {
    value: GeocodeResult,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Thread-safe in-memory cache with a fixed time-to-live.
///
/// Eviction is pull-based: there is no background sweeper, an expired entry
/// is removed by the first [`CacheService::get`] that observes it. Lookups
/// take the read lock; the write lock is held only to insert or to drop an
/// expired entry.
///
/// Expiry is measured with [`tokio::time::Instant`], so paused-clock tests
/// can move time forward deterministically.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        debug!("Using MemoryCache (TTL: {}s)", ttl.as_secs());
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

impl CacheService for MemoryCache {
    fn get(&self, key: &str) -> Option<GeocodeResult> {
        let now = Instant::now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired_at(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        // Re-check under the write lock: a concurrent `set` may have replaced
        // the expired entry with a fresh one in the meantime.
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| entry.is_expired_at(now)) {
            entries.remove(key);
            debug!("Cache EXPIRE: {}", key);
        }

        None
    }

    fn set(&self, key: &str, value: GeocodeResult) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };

        self.entries.write().insert(key.to_string(), entry);
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
