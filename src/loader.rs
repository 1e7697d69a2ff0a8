//! Catalog Loader
//!
//! Runs one fetch cycle: dapp records first, then rating events, then the
//! merge. The two requests are strictly sequential because ratings are only
//! requested once dapp data is known to exist.
//!
//! Failure domains:
//! - Dapp source errors or empty answers end the cycle with a `LoadError`
//! - Rating source errors are logged and degrade every average to 0

use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

use crate::catalog::{apply_ratings, compute_average_ratings, DappData, DappRating, RatingsMap};
use crate::sources::{DappSource, RatingSource, SourceError};

/// Errors that end a fetch cycle
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dapp source answered without any data
    #[error("No DApp data returned")]
    NoData,

    /// The dapp source request failed
    #[error("Failed to fetch dapps: {0}")]
    Dapps(#[source] SourceError),
}

impl LoadError {
    /// Banner text shown to users
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::NoData => "No DApp data returned",
            LoadError::Dapps(_) => "An error occurred while fetching DApp data",
        }
    }
}

/// Fetches and merges dapp records with their ratings
#[derive(Clone)]
pub struct CatalogLoader {
    dapps: Arc<dyn DappSource>,
    ratings: Arc<dyn RatingSource>,
}

impl CatalogLoader {
    pub fn new(dapps: Arc<dyn DappSource>, ratings: Arc<dyn RatingSource>) -> Self {
        Self { dapps, ratings }
    }

    /// Run one fetch cycle and return the enriched dapp list
    pub async fn load(&self) -> Result<Vec<DappData>, LoadError> {
        let started = Instant::now();
        tracing::info!(source = self.dapps.name(), "Fetching dapp data");

        let dapps = self
            .dapps
            .fetch_dapps()
            .await
            .map_err(|e| {
                tracing::error!(source = self.dapps.name(), error = %e, "Dapp fetch failed");
                LoadError::Dapps(e)
            })?
            .ok_or_else(|| {
                tracing::warn!(source = self.dapps.name(), "Dapp source returned no data");
                LoadError::NoData
            })?;

        let ratings = self.average_ratings().await;
        let enriched = apply_ratings(dapps, &ratings);

        tracing::info!(
            dapps = enriched.len(),
            rated = ratings.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetch cycle complete"
        );

        Ok(enriched)
    }

    /// Fetch the raw rating events
    pub async fn load_ratings(&self) -> Result<Vec<DappRating>, SourceError> {
        tracing::info!(source = self.ratings.name(), "Fetching rating events");
        self.ratings.fetch_ratings().await
    }

    /// Average ratings per dapp, empty when the rating source fails
    async fn average_ratings(&self) -> RatingsMap {
        match self.load_ratings().await {
            Ok(events) => {
                tracing::debug!(events = events.len(), "Computing average ratings");
                compute_average_ratings(&events)
            }
            Err(e) => {
                tracing::error!(
                    source = self.ratings.name(),
                    error = %e,
                    "Error fetching ratings, continuing without them"
                );
                RatingsMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogQuery, CatalogView};
    use crate::sources::{StaticDappSource, StaticRatingSource};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource;

    #[async_trait]
    impl DappSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_dapps(&self) -> Result<Option<Vec<DappData>>, SourceError> {
            Err(SourceError::Unavailable("http://gateway".to_string()))
        }
    }

    #[async_trait]
    impl RatingSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_ratings(&self) -> Result<Vec<DappRating>, SourceError> {
            Err(SourceError::GraphQl("indexer down".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingRatings {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RatingSource for CountingRatings {
        fn name(&self) -> &str {
            "counting"
        }

        async fn fetch_ratings(&self) -> Result<Vec<DappRating>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    fn foo_bar() -> StaticDappSource {
        StaticDappSource::new(vec![
            DappData::new("1", "Foo").platform("farcaster"),
            DappData::new("2", "Bar").platform("farcaster"),
        ])
    }

    #[tokio::test]
    async fn test_merges_average_ratings() {
        let loader = CatalogLoader::new(
            Arc::new(foo_bar()),
            Arc::new(StaticRatingSource::new(vec![
                DappRating::new("1", 5),
                DappRating::new("1", 3),
            ])),
        );

        let dapps = loader.load().await.unwrap();
        assert_eq!(dapps[0].average_rating, 4.0);
        assert_eq!(dapps[1].average_rating, 0.0);
    }

    #[tokio::test]
    async fn test_ratings_failure_degrades_to_zero() {
        let loader = CatalogLoader::new(Arc::new(foo_bar()), Arc::new(FailingSource));

        let dapps = loader.load().await.unwrap();
        assert_eq!(dapps.len(), 2);
        assert!(dapps.iter().all(|d| d.average_rating == 0.0));

        let view = CatalogView::build(&dapps, &CatalogQuery::featured());
        assert_eq!(view.len(), 2);
    }

    #[tokio::test]
    async fn test_dapp_failure_skips_ratings() {
        let ratings = Arc::new(CountingRatings::default());
        let loader = CatalogLoader::new(Arc::new(FailingSource), ratings.clone());

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Dapps(_)));
        assert_eq!(err.user_message(), "An error occurred while fetching DApp data");
        assert_eq!(ratings.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_data_skips_ratings() {
        let ratings = Arc::new(CountingRatings::default());
        let loader = CatalogLoader::new(Arc::new(StaticDappSource::no_data()), ratings.clone());

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::NoData));
        assert_eq!(err.user_message(), "No DApp data returned");
        assert_eq!(ratings.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_list_still_fetches_ratings() {
        let ratings = Arc::new(CountingRatings::default());
        let loader = CatalogLoader::new(Arc::new(StaticDappSource::new(Vec::new())), ratings.clone());

        let dapps = loader.load().await.unwrap();
        assert!(dapps.is_empty());
        assert_eq!(ratings.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_ratings_propagates_errors() {
        let loader = CatalogLoader::new(Arc::new(foo_bar()), Arc::new(FailingSource));
        assert!(loader.load_ratings().await.is_err());
    }
}
