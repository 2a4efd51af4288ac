//! Domain layer containing the geocoding model and outbound ports.
//!
//! Nothing in this module depends on HTTP frameworks or concrete clients.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::GeocodeResult`] and its source label
//! - [`errors`] - [`errors::GeocodeError`] taxonomy
//! - [`address`] - Address normalization (cache key derivation)
//! - [`request_context`] - Deadline and cancellation threaded into lookups
//! - [`providers`] - Port implemented by upstream geocoding clients

pub mod address;
pub mod entities;
pub mod errors;
pub mod providers;
pub mod request_context;
