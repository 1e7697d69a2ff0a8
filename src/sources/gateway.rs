//! Contract gateway client
//!
//! Reads the registry contract's `getAllDapps` result through an HTTP
//! gateway that returns it as a JSON array of dapp records, or `null` when
//! the contract call produced nothing.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{error_for_status, http_client, DappSource, SourceError};
use crate::catalog::DappData;

/// Dapp source backed by the contract gateway
pub struct HttpDappSource {
    client: Client,
    url: String,
}

impl HttpDappSource {
    /// Create a source that GETs the dapp list from `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DappSource for HttpDappSource {
    fn name(&self) -> &str {
        "contract-gateway"
    }

    async fn fetch_dapps(&self) -> Result<Option<Vec<DappData>>, SourceError> {
        tracing::debug!(url = %self.url, "Requesting dapp list");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::from_request(&self.url, e))?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        let dapps: Option<Vec<DappData>> = response.json().await?;

        match &dapps {
            Some(list) => tracing::debug!(count = list.len(), "Dapp list received"),
            None => tracing::warn!(url = %self.url, "Contract gateway returned no dapp data"),
        }

        Ok(dapps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::test_support::{closed_port_url, spawn_server};
    use axum::{http::StatusCode, routing::get, Json, Router};

    fn source(base: &str) -> HttpDappSource {
        HttpDappSource::new(format!("{}/dapps", base), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_dapp_list() {
        let router = Router::new().route(
            "/dapps",
            get(|| async {
                Json(serde_json::json!([
                    {"dappId": 1, "name": "Foo", "platform": "farcaster"},
                    {"dappId": 2, "name": "Bar", "platform": "lens"}
                ]))
            }),
        );
        let base = spawn_server(router).await;

        let dapps = source(&base).fetch_dapps().await.unwrap().unwrap();
        assert_eq!(dapps.len(), 2);
        assert_eq!(dapps[0].name, "Foo");
        assert_eq!(dapps[1].dapp_id.as_str(), "2");
    }

    #[tokio::test]
    async fn test_null_payload_is_no_data() {
        let router = Router::new().route("/dapps", get(|| async { Json(serde_json::Value::Null) }));
        let base = spawn_server(router).await;

        assert!(source(&base).fetch_dapps().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_array_is_data() {
        let router = Router::new().route("/dapps", get(|| async { Json(serde_json::json!([])) }));
        let base = spawn_server(router).await;

        let dapps = source(&base).fetch_dapps().await.unwrap();
        assert_eq!(dapps, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let router = Router::new().route(
            "/dapps",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "contract call reverted") }),
        );
        let base = spawn_server(router).await;

        match source(&base).fetch_dapps().await {
            Err(SourceError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "contract call reverted");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_gateway() {
        let base = closed_port_url().await;
        let result = source(&base).fetch_dapps().await;
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }
}
