//! Error taxonomy for geocoding lookups.

/// Failure outcomes of [`crate::application::services::GeocodeService::geocode`].
///
/// Every per-request failure surfaces as one of these variants; the HTTP layer
/// is the only place they are turned into status codes
/// (see [`crate::error::AppError`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodeError {
    /// The address was empty after normalization. Never reaches upstream.
    #[error("address is required")]
    AddressRequired,

    /// The provider answered successfully but matched nothing.
    #[error("no results found")]
    NoResults,

    /// The request deadline passed before the provider answered.
    #[error("geocoding request timed out")]
    Timeout,

    /// The caller cancelled the request before the provider answered.
    #[error("geocoding request was canceled")]
    Canceled,

    /// Any other provider failure: transport, non-200 status, malformed
    /// payload or a non-"OK" provider status.
    #[error("{0}")]
    Upstream(String),
}

impl GeocodeError {
    /// Returns true for deadline or cancellation outcomes.
    pub fn is_deadline(&self) -> bool {
        matches!(self, Self::Timeout | Self::Canceled)
    }
}
