//! Upstream geocoding provider clients.

mod dto;
mod google_client;

pub use google_client::{DEFAULT_GEOCODING_API_URL, GoogleGeocodingClient};
