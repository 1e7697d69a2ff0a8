//! Static sources
//!
//! In-memory sources, optionally loaded from JSON files. Used for offline
//! runs of the CLI and for tests.

use async_trait::async_trait;
use std::path::Path;

use super::{DappSource, RatingSource, SourceError};
use crate::catalog::{DappData, DappRating};

/// Dapp source that always returns the same records
#[derive(Debug, Clone, Default)]
pub struct StaticDappSource {
    dapps: Option<Vec<DappData>>,
}

impl StaticDappSource {
    pub fn new(dapps: Vec<DappData>) -> Self {
        Self { dapps: Some(dapps) }
    }

    /// A source that answers without data
    pub fn no_data() -> Self {
        Self { dapps: None }
    }

    /// Load a JSON array of dapp records (or `null`)
    pub fn from_json_file(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        let dapps = serde_json::from_str(&content)
            .map_err(|e| SourceError::Parse(format!("{}: {}", path.display(), e)))?;
        Ok(Self { dapps })
    }
}

#[async_trait]
impl DappSource for StaticDappSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_dapps(&self) -> Result<Option<Vec<DappData>>, SourceError> {
        Ok(self.dapps.clone())
    }
}

/// Rating source that always returns the same events
#[derive(Debug, Clone, Default)]
pub struct StaticRatingSource {
    ratings: Vec<DappRating>,
}

impl StaticRatingSource {
    pub fn new(ratings: Vec<DappRating>) -> Self {
        Self { ratings }
    }

    /// Load a JSON array of rating events
    pub fn from_json_file(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        let ratings = serde_json::from_str(&content)
            .map_err(|e| SourceError::Parse(format!("{}: {}", path.display(), e)))?;
        Ok(Self { ratings })
    }
}

#[async_trait]
impl RatingSource for StaticRatingSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_ratings(&self) -> Result<Vec<DappRating>, SourceError> {
        Ok(self.ratings.clone())
    }
}
