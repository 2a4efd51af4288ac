//! Application layer services implementing business logic.
//!
//! Services consume domain ports and infrastructure traits and provide a clean
//! API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::geocode_service::GeocodeService`] - Cached address lookup
pub mod services;
