//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated before the server
//! starts, and then passed by value into the components that need it. Nothing
//! reads the environment after startup.
//!
//! ## Sources
//!
//! A local `.env` file (`key=value` lines) is read first if present, without
//! overriding variables already set in the process environment. A missing
//! file is ignored; a malformed one is a startup error.
//!
//! ## Required Variables
//!
//! - `GOOGLE_MAPS_API_KEY` - Geocoding API key. Startup fails without it.
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `8080`)
//! - `LISTEN_HOST` - Bind host (default: `0.0.0.0`)
//! - `CACHE_ENABLED` - `false` disables the lookup cache (default: `true`)
//! - `CACHE_TTL_SECONDS` - Lifetime of cached lookups (default: 1800)
//! - `REQUEST_TIMEOUT_MS` - Deadline of each geocoding request (default: 3000)
//! - `UPSTREAM_TIMEOUT_SECONDS` - HTTP client timeout towards the provider (default: 5)
//! - `GEOCODING_API_URL` - Provider endpoint (default: Google Maps Geocoding API)
//! - `RATE_LIMIT_PER_SECOND` - Enables per-IP inbound rate limiting when set
//! - `RATE_LIMIT_BURST` - Burst size for rate limiting (default: 50)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::api::middleware::rate_limit::RateLimit;
use crate::infrastructure::geocoding::DEFAULT_GEOCODING_API_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key (`GOOGLE_MAPS_API_KEY`). Never logged in clear.
    pub api_key: String,
    pub host: String,
    pub port: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, every lookup goes upstream.
    pub cache_enabled: bool,
    /// Fixed lifetime of cache entries, in seconds.
    pub cache_ttl_seconds: u64,
    /// Per-request deadline applied by the HTTP handler, in milliseconds.
    pub request_timeout_ms: u64,
    /// Transport timeout of the upstream HTTP client, in seconds.
    pub upstream_timeout_seconds: u64,
    pub geocoding_api_url: String,
    /// Inbound requests per second per client IP; `None` disables limiting.
    pub rate_limit_per_second: Option<u64>,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GOOGLE_MAPS_API_KEY` is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY").context("GOOGLE_MAPS_API_KEY is required")?;

        let host = env::var("LISTEN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let cache_ttl_seconds = parse_var("CACHE_TTL_SECONDS")?.unwrap_or(30 * 60);
        let request_timeout_ms = parse_var("REQUEST_TIMEOUT_MS")?.unwrap_or(3000);
        let upstream_timeout_seconds = parse_var("UPSTREAM_TIMEOUT_SECONDS")?.unwrap_or(5);

        let geocoding_api_url = env::var("GEOCODING_API_URL")
            .unwrap_or_else(|_| DEFAULT_GEOCODING_API_URL.to_string());

        let rate_limit_per_second = parse_var("RATE_LIMIT_PER_SECOND")?;
        let rate_limit_burst = parse_var("RATE_LIMIT_BURST")?.unwrap_or(50);

        Ok(Self {
            api_key,
            host,
            port,
            log_level,
            log_format,
            cache_enabled,
            cache_ttl_seconds,
            request_timeout_ms,
            upstream_timeout_seconds,
            geocoding_api_url,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API key is blank
    /// - `PORT` is not a valid port number
    /// - a TTL or timeout is zero
    /// - `GEOCODING_API_URL` is not an absolute http(s) URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - rate limiting is enabled with a zero rate or burst
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("GOOGLE_MAPS_API_KEY is required");
        }

        if self.port.parse::<u16>().is_err() {
            anyhow::bail!("PORT must be a valid port number, got '{}'", self.port);
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.request_timeout_ms == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_MS must be greater than 0");
        }

        if self.upstream_timeout_seconds == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECONDS must be greater than 0");
        }

        let url = url::Url::parse(&self.geocoding_api_url).with_context(|| {
            format!(
                "GEOCODING_API_URL must be a valid URL, got '{}'",
                self.geocoding_api_url
            )
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "GEOCODING_API_URL must use http or https, got '{}'",
                self.geocoding_api_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(per_second) = self.rate_limit_per_second
            && (per_second == 0 || self.rate_limit_burst == 0)
        {
            anyhow::bail!("RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Bind address in `host:port` form.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    /// Returns the inbound rate limit, if enabled.
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit_per_second.map(|per_second| RateLimit {
            per_second,
            burst: self.rate_limit_burst,
        })
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Geocoding API: {}", self.geocoding_api_url);

        if self.cache_enabled {
            tracing::info!("  Cache: enabled (TTL: {}s)", self.cache_ttl_seconds);
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!("  Request timeout: {}ms", self.request_timeout_ms);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);

        match self.rate_limit() {
            Some(limit) => tracing::info!(
                "  Rate limit: {}/s per IP (burst: {})",
                limit.per_second,
                limit.burst
            ),
            None => tracing::info!("  Rate limit: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable. Unset or empty yields `None`.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        _ => Ok(None),
    }
}

/// Masks a secret for logging, keeping at most the first four characters.
///
/// - `AIzaSyD-example-key` → `AIza***`
/// - `short` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads `key=value` pairs from `path` into the process environment.
///
/// Variables already present in the environment are left untouched.
/// A missing file is not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to load {}", path.display())),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects the `.env` file to be already loaded
/// (see [`load_env_file`]).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 12] = [
        "GOOGLE_MAPS_API_KEY",
        "LISTEN_HOST",
        "PORT",
        "LOG_FORMAT",
        "CACHE_ENABLED",
        "CACHE_TTL_SECONDS",
        "REQUEST_TIMEOUT_MS",
        "UPSTREAM_TIMEOUT_SECONDS",
        "GEOCODING_API_URL",
        "RATE_LIMIT_PER_SECOND",
        "RATE_LIMIT_BURST",
        "GEOCODE_TEST_FROM_FILE",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn test_config() -> Config {
        Config {
            api_key: "AIzaSyD-test-key".to_string(),
            host: "0.0.0.0".to_string(),
            port: "8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_enabled: true,
            cache_ttl_seconds: 1800,
            request_timeout_ms: 3000,
            upstream_timeout_seconds: 5,
            geocoding_api_url: DEFAULT_GEOCODING_API_URL.to_string(),
            rate_limit_per_second: None,
            rate_limit_burst: 50,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("AIzaSyD-test-key"), "AIza***");
        assert_eq!(mask_secret("short"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.api_key = "  ".to_string();
        assert!(config.validate().is_err());
        config.api_key = "AIzaSyD-test-key".to_string();

        config.port = "http".to_string();
        assert!(config.validate().is_err());
        config.port = "8080".to_string();

        config.cache_ttl_seconds = 0;
        assert!(config.validate().is_err());
        config.cache_ttl_seconds = 1800;

        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());
        config.request_timeout_ms = 3000;

        config.geocoding_api_url = "ftp://example.com/geocode".to_string();
        assert!(config.validate().is_err());
        config.geocoding_api_url = "not a url".to_string();
        assert!(config.validate().is_err());
        config.geocoding_api_url = "http://127.0.0.1:9000/geocode".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.rate_limit_per_second = Some(0);
        assert!(config.validate().is_err());
        config.rate_limit_per_second = Some(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_values() {
        let mut config = test_config();

        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.cache_ttl(), Duration::from_secs(1800));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.upstream_timeout(), Duration::from_secs(5));
        assert_eq!(config.rate_limit(), None);

        config.rate_limit_per_second = Some(10);
        assert_eq!(
            config.rate_limit(),
            Some(RateLimit {
                per_second: 10,
                burst: 50
            })
        );
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_fatal() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("GOOGLE_MAPS_API_KEY"));

        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("GOOGLE_MAPS_API_KEY", "");
        }
        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("GOOGLE_MAPS_API_KEY", "AIzaSyD-test-key");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.port, "8080");
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl_seconds, 1800);
        assert_eq!(config.request_timeout_ms, 3000);
        assert_eq!(config.upstream_timeout_seconds, 5);
        assert_eq!(config.geocoding_api_url, DEFAULT_GEOCODING_API_URL);
        assert_eq!(config.rate_limit(), None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("GOOGLE_MAPS_API_KEY", "AIzaSyD-test-key");
            env::set_var("PORT", "9090");
            env::set_var("CACHE_ENABLED", "false");
            env::set_var("CACHE_TTL_SECONDS", "60");
            env::set_var("REQUEST_TIMEOUT_MS", "1500");
            env::set_var("RATE_LIMIT_PER_SECOND", "5");
            env::set_var("RATE_LIMIT_BURST", "20");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr(), "0.0.0.0:9090");
        assert!(!config.cache_enabled);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.request_timeout(), Duration::from_millis(1500));
        assert_eq!(
            config.rate_limit(),
            Some(RateLimit {
                per_second: 5,
                burst: 20
            })
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_number_rejected() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("GOOGLE_MAPS_API_KEY", "AIzaSyD-test-key");
            env::set_var("CACHE_TTL_SECONDS", "thirty minutes");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("CACHE_TTL_SECONDS"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_env_file() {
        clear_env();

        let path = env::temp_dir().join(format!("geocode-service-test-{}.env", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "# comment").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "GEOCODE_TEST_FROM_FILE=\"quoted value\"").unwrap();
            writeln!(file, "PORT=9191").unwrap();
        }

        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("PORT", "7070");
        }

        load_env_file(&path).unwrap();

        assert_eq!(env::var("GEOCODE_TEST_FROM_FILE").unwrap(), "quoted value");
        // Process environment wins over the file.
        assert_eq!(env::var("PORT").unwrap(), "7070");

        std::fs::remove_file(&path).unwrap();
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_env_file_ignored() {
        let path = env::temp_dir().join("geocode-service-does-not-exist.env");
        assert!(load_env_file(path).is_ok());
    }
}
