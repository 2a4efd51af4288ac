//! Business logic services for the application layer.

pub mod geocode_service;

pub use geocode_service::GeocodeService;
