//! External Data Sources
//!
//! The catalog is assembled from two independent sources:
//! - Dapp records, read from the registry contract through an HTTP gateway
//! - Rating submission events, read from the indexing subgraph
//!
//! Both sit behind async traits so the loader can be driven by HTTP clients
//! in production and by static fixtures offline or in tests.

mod gateway;
mod local;
mod subgraph;

pub use gateway::HttpDappSource;
pub use local::{StaticDappSource, StaticRatingSource};
pub use subgraph::{SubgraphClient, DEFAULT_MAX_EVENTS};

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{DappData, DappRating};

/// Source of dapp records
#[async_trait]
pub trait DappSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch the full dapp list
    ///
    /// `Ok(None)` means the source answered without any data, which is
    /// different from an empty list.
    async fn fetch_dapps(&self) -> Result<Option<Vec<DappData>>, SourceError>;
}

/// Source of rating submission events
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch every rating event
    async fn fetch_ratings(&self) -> Result<Vec<DappRating>, SourceError>;
}

/// Errors that can occur when reading a source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl SourceError {
    /// Classify a transport error from reqwest
    pub(crate) fn from_request(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SourceError::Timeout
        } else if error.is_connect() {
            SourceError::Unavailable(url.to_string())
        } else {
            SourceError::Request(error)
        }
    }
}

/// Build the shared reqwest client used by the HTTP sources
pub(crate) fn http_client(timeout: std::time::Duration) -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(SourceError::Request)
}

/// Turn a non-success response into an `Api` error
pub(crate) async fn error_for_status(response: reqwest::Response) -> SourceError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    SourceError::Api {
        status: status.as_u16(),
        message,
    }
}
