//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::FEATURED_PLATFORM;
use crate::loader::CatalogLoader;
use crate::sources::{HttpDappSource, SourceError, SubgraphClient};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8084".to_string(),
        "http://127.0.0.1:8084".to_string(),
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// External data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Contract gateway endpoint returning the dapp list
    #[serde(default = "default_dapps_url")]
    pub dapps_url: String,

    /// Subgraph GraphQL endpoint
    #[serde(default = "default_subgraph_url")]
    pub subgraph_url: String,

    /// Rating events requested per query
    #[serde(default = "default_max_rating_events")]
    pub max_rating_events: u32,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_dapps_url() -> String {
    "http://localhost:8545/dapps".to_string()
}

fn default_subgraph_url() -> String {
    "http://localhost:8000/subgraphs/name/dapp-ratings".to_string()
}

fn default_max_rating_events() -> u32 {
    crate::sources::DEFAULT_MAX_EVENTS
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dapps_url: default_dapps_url(),
            subgraph_url: default_subgraph_url(),
            max_rating_events: default_max_rating_events(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl SourcesConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build a loader backed by the configured HTTP sources
    pub fn build_loader(&self) -> Result<CatalogLoader, SourceError> {
        let dapps = HttpDappSource::new(&self.dapps_url, self.request_timeout())?;
        let ratings = SubgraphClient::new(&self.subgraph_url, self.request_timeout())?
            .max_events(self.max_rating_events);

        Ok(CatalogLoader::new(Arc::new(dapps), Arc::new(ratings)))
    }
}

/// Catalog presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Platform tag shown when a request does not name one
    #[serde(default = "default_platform")]
    pub platform: String,
}

fn default_platform() -> String {
    FEATURED_PLATFORM.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber
    ///
    /// `RUST_LOG` wins over the configured level.
    pub fn init(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "dapp_ratings={level},tower_http={level}",
                level = self.level
            ))
        });

        let registry = tracing_subscriber::registry().with(filter);

        if self.format == "json" {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        } else {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is installed, so problems go to stderr.
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dapp-ratings").join("config.toml")),
            Some(PathBuf::from("/etc/dapp-ratings/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Ignoring config: {}", e),
                }
            }
        }

        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = var("DAPP_RATINGS_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("DAPP_RATINGS_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Source overrides
        if let Some(url) = var("DAPP_RATINGS_DAPPS_URL") {
            self.sources.dapps_url = url;
        }
        if let Some(url) = var("DAPP_RATINGS_SUBGRAPH_URL") {
            self.sources.subgraph_url = url;
        }

        if let Some(platform) = var("DAPP_RATINGS_PLATFORM") {
            self.catalog.platform = platform;
        }

        // Logging overrides
        if let Some(level) = var("DAPP_RATINGS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("DAPP_RATINGS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Dapp Ratings Configuration
#
# Environment variables override these settings:
# - DAPP_RATINGS_API_HOST
# - DAPP_RATINGS_API_PORT
# - DAPP_RATINGS_DAPPS_URL
# - DAPP_RATINGS_SUBGRAPH_URL
# - DAPP_RATINGS_PLATFORM
# - DAPP_RATINGS_LOG_LEVEL
# - DAPP_RATINGS_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

[sources]
# Contract gateway endpoint returning the getAllDapps result as JSON
dapps_url = "http://localhost:8545/dapps"

# Subgraph GraphQL endpoint indexing DappRatingSubmitted events
subgraph_url = "http://localhost:8000/subgraphs/name/dapp-ratings"

# Rating events requested per query
max_rating_events = 1000

# Request timeout in seconds
request_timeout_secs = 30

[catalog]
# Platform tag shown by default
platform = "farcaster"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8082);
        assert_eq!(config.catalog.platform, "farcaster");
        assert_eq!(config.sources.max_rating_events, 1000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.api.addr(), defaults.api.addr());
        assert_eq!(config.api.cors_origins, defaults.api.cors_origins);
        assert_eq!(config.sources.dapps_url, defaults.sources.dapps_url);
        assert_eq!(config.sources.subgraph_url, defaults.sources.subgraph_url);
        assert_eq!(config.catalog.platform, defaults.catalog.platform);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sources]\nsubgraph_url = \"https://example.com/graphql\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.sources.subgraph_url, "https://example.com/graphql");
        assert_eq!(config.sources.request_timeout_secs, 30);
        assert_eq!(config.api.port, 8082);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load(Path::new("/nonexistent/config.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DAPP_RATINGS_API_PORT", "9000"),
            ("DAPP_RATINGS_PLATFORM", "lens"),
            ("DAPP_RATINGS_DAPPS_URL", "http://gateway/dapps"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.catalog.platform, "lens");
        assert_eq!(config.sources.dapps_url, "http://gateway/dapps");
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "DAPP_RATINGS_API_PORT").then(|| "abc".to_string()));
        assert_eq!(config.api.port, 8082);
    }

    #[test]
    fn test_build_loader() {
        assert!(SourcesConfig::default().build_loader().is_ok());
    }
}
