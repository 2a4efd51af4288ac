//! Command-line geocoding lookups.
//!
//! Runs addresses through the same cached service the HTTP server uses,
//! without starting the server. Useful to check an API key or inspect what
//! the provider returns for a given address.
//!
//! # Usage
//!
//! ```bash
//! # Single lookup
//! cargo run --bin lookup -- "1 Infinite Loop, Cupertino"
//!
//! # Several lookups; repeated addresses are served from the cache
//! cargo run --bin lookup -- "Main St" "  MAIN st "
//!
//! # JSON output, one object per line
//! cargo run --bin lookup -- --json "Main St"
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`geocode_service::config`]. `GOOGLE_MAPS_API_KEY`
//! is required.

use geocode_service::api::dto::geocode::GeocodeResponse;
use geocode_service::config;
use geocode_service::domain::request_context::RequestContext;
use geocode_service::server::build_geocode_service;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::time::Duration;

/// Resolve addresses to coordinates.
#[derive(Parser)]
#[command(name = "lookup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Addresses to resolve, in order
    #[arg(required = true)]
    addresses: Vec<String>,

    /// Per-lookup deadline in milliseconds (defaults to REQUEST_TIMEOUT_MS)
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_env_file(".env")?;

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;
    let service = build_geocode_service(&config)?;

    let timeout = cli
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.request_timeout());

    let mut failures = 0usize;

    for address in &cli.addresses {
        let ctx = RequestContext::with_timeout(timeout);

        match service.geocode(&ctx, address).await {
            Ok(result) => {
                let response = GeocodeResponse::from(result);
                if cli.json {
                    println!("{}", serde_json::to_string(&response)?);
                } else {
                    print_result(address, &response);
                }
            }
            Err(e) => {
                failures += 1;
                if cli.json {
                    println!(
                        "{}",
                        serde_json::json!({ "query": address, "error": e.to_string() })
                    );
                } else {
                    println!("{} {}: {}", "✗".red().bold(), address.bold(), e);
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} lookups failed", failures, cli.addresses.len());
    }

    Ok(())
}

/// Prints a single result in human-readable form.
fn print_result(query: &str, response: &GeocodeResponse) {
    let source = if response.is_cached() {
        response.source.as_str().cyan()
    } else {
        response.source.as_str().green()
    };

    println!("{} {}", "✓".green().bold(), query.bold());
    println!("  {}   {}", "Address:".dimmed(), response.address);
    println!(
        "  {}  {:.6}, {:.6}",
        "Location:".dimmed(),
        response.latitude,
        response.longitude
    );
    println!("  {}    {}", "Source:".dimmed(), source);
}
