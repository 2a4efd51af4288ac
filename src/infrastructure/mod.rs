//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - In-memory and no-op cache implementations
//! - [`geocoding`] - HTTP client for the upstream geocoding provider

pub mod cache;
pub mod geocoding;
