//! Route catalog diagnostics.
//!
//! Builds the catalog (routes file if configured, builtin tables otherwise),
//! then logs the per-chain route listing and total count.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use arb_routes::catalog::{default_catalog, RouteCatalog};
use arb_routes::config::{Config, RoutesFile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let catalog = match &config.routes_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Building catalog from routes file");
            RouteCatalog::from_routes_file(RoutesFile::load(path)?)?
        }
        None => {
            tracing::info!("Building catalog from builtin route tables");
            default_catalog()?
        }
    };

    catalog.log_route_stats(&config.chains);

    Ok(())
}
