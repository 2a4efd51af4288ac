//! Caching layer for geocoding results.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - In-memory TTL cache, the default
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::CacheService;
