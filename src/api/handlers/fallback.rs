//! Fallback for known paths hit with an unsupported method.

use crate::error::AppError;

/// Answers `405 Method Not Allowed` in the usual error envelope. The router
/// still attaches the `Allow` header.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed()
}
