//! Dapp Ratings REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Catalog
//! - `GET /api/v1/catalog` - Rated, sorted, filtered dapp view
//!   (`?search=`, `?platform=`, `?all_platforms=true`)
//! - `GET /api/v1/dapps` - Enriched dapp list
//! - `GET /api/v1/ratings` - Rating aggregates per dapp
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use dapp_ratings::api::{serve, AppState};
//! use dapp_ratings::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let loader = config.sources.build_loader()?;
//!
//!     let state = AppState::from_config(loader, &config);
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/catalog", get(routes::catalog::get_catalog))
        .route("/dapps", get(routes::catalog::list_dapps))
        .route("/ratings", get(routes::catalog::list_ratings));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured UI origins, permissive when none are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([Method::GET])
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dapp Ratings API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dapp Ratings API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DappData, DappRating};
    use crate::loader::CatalogLoader;
    use crate::sources::{
        DappSource, RatingSource, SourceError, StaticDappSource, StaticRatingSource,
    };
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    struct DownSource;

    #[async_trait]
    impl DappSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn fetch_dapps(&self) -> Result<Option<Vec<DappData>>, SourceError> {
            Err(SourceError::Timeout)
        }
    }

    #[async_trait]
    impl RatingSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn fetch_ratings(&self) -> Result<Vec<DappRating>, SourceError> {
            Err(SourceError::GraphQl("indexer down".to_string()))
        }
    }

    fn sample_dapps() -> StaticDappSource {
        StaticDappSource::new(vec![
            DappData::new("1", "FooBar")
                .platform("farcaster")
                .url("https://foo.xyz"),
            DappData::new("2", "Bar").platform("Farcaster"),
            DappData::new("3", "Lens Thing").platform("lens"),
        ])
    }

    fn sample_ratings() -> StaticRatingSource {
        StaticRatingSource::new(vec![
            DappRating::new("1", 5),
            DappRating::new("1", 3),
            DappRating::new("2", 5),
            DappRating::new("3", 1),
        ])
    }

    fn create_app(dapps: Arc<dyn DappSource>, ratings: Arc<dyn RatingSource>) -> Router {
        let loader = CatalogLoader::new(dapps, ratings);
        let state = AppState::new(loader, "farcaster", ApiConfig::default());
        build_router(state)
    }

    fn create_test_app() -> Router {
        create_app(Arc::new(sample_dapps()), Arc::new(sample_ratings()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn names(body: &Value) -> Vec<String> {
        body["dapps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["platform"], "farcaster");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_catalog_featured_platform_sorted() {
        let (status, body) = get_json(create_test_app(), "/api/v1/catalog").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["Bar", "FooBar"]);
        assert_eq!(body["total"], 3);
        assert_eq!(body["dapps"][1]["averageRating"], 4.0);
        assert_eq!(body["dapps"][1]["stars"], 4);
        assert_eq!(body["dapps"][1]["rateUrl"], "/rate-dapp?dappId=1");
        assert_eq!(body["registerUrl"], "/register-project");
    }

    #[tokio::test]
    async fn test_catalog_search() {
        let (status, body) = get_json(create_test_app(), "/api/v1/catalog?search=foo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["FooBar"]);
    }

    #[tokio::test]
    async fn test_catalog_other_platform() {
        let (_, body) = get_json(create_test_app(), "/api/v1/catalog?platform=LENS").await;
        assert_eq!(names(&body), vec!["Lens Thing"]);
    }

    #[tokio::test]
    async fn test_catalog_all_platforms() {
        let (_, body) = get_json(create_test_app(), "/api/v1/catalog?all_platforms=true").await;
        assert_eq!(names(&body), vec!["Bar", "FooBar", "Lens Thing"]);
    }

    #[tokio::test]
    async fn test_catalog_empty_search() {
        let (status, body) = get_json(create_test_app(), "/api/v1/catalog?search=zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["dapps"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_ratings_down_defaults_to_zero() {
        let app = create_app(Arc::new(sample_dapps()), Arc::new(DownSource));
        let (status, body) = get_json(app, "/api/v1/catalog").await;

        assert_eq!(status, StatusCode::OK);
        let dapps = body["dapps"].as_array().unwrap();
        assert_eq!(dapps.len(), 2);
        assert!(dapps.iter().all(|d| d["averageRating"] == 0.0));
    }

    #[tokio::test]
    async fn test_catalog_dapps_down() {
        let app = create_app(Arc::new(DownSource), Arc::new(sample_ratings()));
        let (status, body) = get_json(app, "/api/v1/catalog").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "DAPP_FETCH_FAILED");
        assert_eq!(
            body["error"]["message"],
            "An error occurred while fetching DApp data"
        );
        assert!(body.get("dapps").is_none());
    }

    #[tokio::test]
    async fn test_catalog_no_data() {
        let app = create_app(Arc::new(StaticDappSource::no_data()), Arc::new(sample_ratings()));
        let (status, body) = get_json(app, "/api/v1/catalog").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["message"], "No DApp data returned");
    }

    #[tokio::test]
    async fn test_list_dapps() {
        let (status, body) = get_json(create_test_app(), "/api/v1/dapps").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["dapps"][0]["averageRating"], 4.0);
    }

    #[tokio::test]
    async fn test_list_ratings() {
        let (status, body) = get_json(create_test_app(), "/api/v1/ratings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["events"], 4);
        assert_eq!(body["ratings"][0]["dapp_id"], "2");
        assert_eq!(body["ratings"][1]["count"], 2);
        assert_eq!(body["ratings"][1]["average"], 4.0);
    }

    #[tokio::test]
    async fn test_list_ratings_source_down() {
        let app = create_app(Arc::new(sample_dapps()), Arc::new(DownSource));
        let (status, body) = get_json(app, "/api/v1/ratings").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Construction must not panic on bad input
        let _ = cors_layer(&["http://localhost:8084".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }
}
