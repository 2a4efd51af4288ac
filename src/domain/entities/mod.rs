//! Core business entities.

pub mod geocode_result;

pub use geocode_result::{GeocodeResult, ResultSource};
