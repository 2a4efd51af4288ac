//! # Geocode Service
//!
//! A small HTTP gateway that resolves free-text addresses to coordinates by
//! delegating to an external geocoding provider, shielding the provider from
//! repeated identical lookups with a short-lived in-memory cache.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Result model, error taxonomy, request deadlines, provider port
//! - **Application Layer** ([`application`]) - Cache-then-upstream lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory TTL cache and the upstream HTTP client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Lookup Flow
//!
//! 1. The address is trimmed and lower-cased into a cache key
//! 2. A cache hit is returned immediately with `source = "cache"`
//! 3. On a miss, one upstream request is made within the request deadline
//! 4. The first match is cached and returned with `source = "upstream"`
//!
//! Failures and empty result sets are never cached, and nothing is retried.
//!
//! ## Quick Start
//!
//! ```bash
//! export GOOGLE_MAPS_API_KEY="..."
//! cargo run
//! curl 'http://localhost:8080/geocode?address=1+Infinite+Loop'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from the environment (and an optional
//! `.env` file) via [`config::Config`]. See [`config`] module for available
//! options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::GeocodeService;
    pub use crate::domain::entities::{GeocodeResult, ResultSource};
    pub use crate::domain::errors::GeocodeError;
    pub use crate::domain::providers::{
        Candidate, GeocodingProvider, ProviderError, ProviderResponse,
    };
    pub use crate::domain::request_context::{CancelHandle, RequestContext};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
    pub use crate::state::AppState;
}
