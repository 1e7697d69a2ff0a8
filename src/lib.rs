//! # Dapp Ratings
//!
//! Fetches decentralized-application records and user star ratings from two
//! external sources, merges them into per-dapp averages and serves a
//! searchable, rating-sorted catalog.
//!
//! ## Modules
//!
//! - [`catalog`]: Domain types, rating aggregation and the catalog view
//! - [`sources`]: Contract gateway and subgraph clients
//! - [`loader`]: One fetch-and-merge cycle over both sources
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dapp_ratings::catalog::{CatalogQuery, CatalogView};
//! use dapp_ratings::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let loader = config.sources.build_loader()?;
//!
//!     let dapps = loader.load().await?;
//!     let view = CatalogView::build(&dapps, &CatalogQuery::featured().search("frame"));
//!
//!     for entry in &view.dapps {
//!         println!("{} {:.1}", entry.dapp.name, entry.dapp.average_rating);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod loader;
pub mod sources;

// Re-export top-level types for convenience
pub use catalog::{
    apply_ratings, compute_average_ratings, CatalogEntry, CatalogQuery, CatalogView, DappData,
    DappId, DappRating, RatingsMap,
};

pub use sources::{
    DappSource, HttpDappSource, RatingSource, SourceError, StaticDappSource, StaticRatingSource,
    SubgraphClient,
};

pub use loader::{CatalogLoader, LoadError};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, CatalogConfig, Config, ConfigError, LoggingConfig, SourcesConfig};
