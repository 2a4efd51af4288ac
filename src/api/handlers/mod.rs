//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod geocode;
pub mod health;

pub use fallback::method_not_allowed_handler;
pub use geocode::geocode_handler;
pub use health::health_handler;
