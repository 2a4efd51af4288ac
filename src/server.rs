//! HTTP server initialization and runtime setup.
//!
//! Wires the upstream client, cache and service together and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::GeocodeService;
use crate::config::Config;
use crate::domain::providers::GeocodingProvider;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::infrastructure::geocoding::GoogleGeocodingClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the geocoding service described by `config`.
///
/// Shared by the HTTP server and the `lookup` CLI.
///
/// # Errors
///
/// Returns an error if the API URL is invalid or the HTTP client cannot be built.
pub fn build_geocode_service(config: &Config) -> Result<GeocodeService> {
    let endpoint = config
        .geocoding_api_url
        .parse::<reqwest::Url>()
        .context("Invalid GEOCODING_API_URL")?;

    let provider: Arc<dyn GeocodingProvider> = Arc::new(
        GoogleGeocodingClient::new(
            endpoint,
            config.api_key.clone(),
            config.upstream_timeout(),
        )
        .context("Failed to build HTTP client")?,
    );

    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        tracing::info!("Cache enabled (in-memory, TTL {}s)", config.cache_ttl_seconds);
        Arc::new(MemoryCache::new(config.cache_ttl()))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    Ok(GeocodeService::new(provider, cache))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The service cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let service = Arc::new(build_geocode_service(&config)?);
    let state = AppState::new(service, config.request_timeout());

    let app = app_router(state, config.rate_limit())?;

    let addr = config
        .listen_addr()
        .parse::<SocketAddr>()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
