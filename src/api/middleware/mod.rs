//! HTTP middleware for request processing and protection.
//!
//! Provides inbound rate limiting and observability middleware.

pub mod rate_limit;
pub mod tracing;
