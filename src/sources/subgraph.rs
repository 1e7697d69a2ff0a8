//! Subgraph GraphQL client
//!
//! Reads `DappRatingSubmitted` events from the indexing subgraph.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{error_for_status, http_client, RatingSource, SourceError};
use crate::catalog::DappRating;

const RATINGS_QUERY: &str = "query DappRatings($first: Int!) { \
     dappRatingSubmitteds(first: $first) { dappId starRating } \
     }";

/// Default number of rating events requested per query
pub const DEFAULT_MAX_EVENTS: u32 = 1000;

/// Rating source backed by a subgraph endpoint
pub struct SubgraphClient {
    client: Client,
    url: String,
    max_events: u32,
}

impl SubgraphClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
            max_events: DEFAULT_MAX_EVENTS,
        })
    }

    /// Builder method: cap the number of events requested
    pub fn max_events(mut self, max_events: u32) -> Self {
        self.max_events = max_events;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RatingSource for SubgraphClient {
    fn name(&self) -> &str {
        "subgraph"
    }

    async fn fetch_ratings(&self) -> Result<Vec<DappRating>, SourceError> {
        let body = GraphQlRequest {
            query: RATINGS_QUERY,
            variables: RatingsVariables {
                first: self.max_events,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SourceError::from_request(&self.url, e))?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        let result: GraphQlResponse<RatingsData> = response.json().await?;

        match result.data {
            Some(data) => {
                if !result.errors.is_empty() {
                    tracing::warn!(
                        errors = %join_messages(&result.errors),
                        "Subgraph returned partial data"
                    );
                }
                tracing::debug!(count = data.dapp_rating_submitteds.len(), "Rating events received");
                Ok(data.dapp_rating_submitteds)
            }
            None if !result.errors.is_empty() => {
                Err(SourceError::GraphQl(join_messages(&result.errors)))
            }
            None => {
                tracing::warn!(url = %self.url, "Subgraph response carried no data");
                Ok(Vec::new())
            }
        }
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: RatingsVariables,
}

#[derive(Debug, Serialize)]
struct RatingsVariables {
    first: u32,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatingsData {
    #[serde(default)]
    dapp_rating_submitteds: Vec<DappRating>,
}
