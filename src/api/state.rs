//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::time::Instant;

use crate::config::{ApiConfig, Config};
use crate::loader::CatalogLoader;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Runs one fetch cycle per catalog request
    pub loader: CatalogLoader,
    /// Platform shown when a request names none
    pub platform: String,
    /// API configuration
    pub config: ApiConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(loader: CatalogLoader, platform: impl Into<String>, config: ApiConfig) -> Self {
        Self {
            loader,
            platform: platform.into(),
            config,
            start_time: Instant::now(),
        }
    }

    /// Build state from a full configuration
    pub fn from_config(loader: CatalogLoader, config: &Config) -> Self {
        Self::new(loader, config.catalog.platform.clone(), config.api.clone())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
