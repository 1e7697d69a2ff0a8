//! Dapp Ratings API Server
//!
//! Run with: cargo run --bin dapp-ratings
//!
//! # Configuration
//!
//! Read from `./config.toml`, `/etc/dapp-ratings/config.toml` or the user
//! config directory, then overridden by environment variables:
//! - `DAPP_RATINGS_API_HOST` / `DAPP_RATINGS_API_PORT`
//! - `DAPP_RATINGS_DAPPS_URL`: Contract gateway endpoint
//! - `DAPP_RATINGS_SUBGRAPH_URL`: Subgraph GraphQL endpoint
//! - `DAPP_RATINGS_PLATFORM`: Platform featured by default
//! - `DAPP_RATINGS_LOG_LEVEL` / `DAPP_RATINGS_LOG_FORMAT`
//! - `RUST_LOG`: Log filter, wins over the configured level

use dapp_ratings::api::{serve, AppState};
use dapp_ratings::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    config.logging.init();

    tracing::info!("Starting Dapp Ratings API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dapp source: {}", config.sources.dapps_url);
    tracing::info!("Rating source: {}", config.sources.subgraph_url);
    tracing::info!("Featured platform: {}", config.catalog.platform);

    let loader = config.sources.build_loader()?;
    let state = AppState::from_config(loader, &config);

    serve(state, &config.api).await?;

    tracing::info!("Dapp Ratings API server stopped");
    Ok(())
}
