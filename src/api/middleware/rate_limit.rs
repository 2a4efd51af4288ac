//! Inbound rate limiting middleware using token bucket algorithm.
//!
//! Only requests reaching this service are limited; calls to the upstream
//! provider are never throttled here.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-client token bucket settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Interval-based replenishment, in requests per second.
    pub per_second: u64,
    /// Maximum number of requests admitted in a burst.
    pub burst: u32,
}

/// Creates a per-IP rate limiter for public endpoints.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/geocode", get(geocode_handler))
///     .layer(rate_limit::layer(RateLimit { per_second: 10, burst: 50 })?);
/// ```
pub fn layer(
    limit: RateLimit,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(limit.per_second)
        .burst_size(limit.burst)
        .finish()
        .context("Invalid rate limit: per-second rate and burst must be non-zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
