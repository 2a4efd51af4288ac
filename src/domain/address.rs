//! Address normalization used to derive cache keys and upstream queries.

/// Normalizes a raw address into its cache key.
///
/// Trims surrounding whitespace and lower-cases the remainder, so inputs that
/// differ only by case or leading/trailing whitespace share one cache entry.
/// The same string is sent upstream. Idempotent.
pub fn normalize_address(raw: &str) -> String {
    raw.trim().to_lowercase()
}
