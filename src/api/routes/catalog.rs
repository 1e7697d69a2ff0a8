//! Catalog Routes
//!
//! Every request runs a fresh fetch cycle; nothing is cached.
//!
//! - GET /api/v1/catalog - Sorted, filtered view for rendering
//! - GET /api/v1/dapps - Enriched dapp list, unfiltered
//! - GET /api/v1/ratings - Rating aggregates per dapp

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CatalogParams, DappListResponse, RatingSummaryDto, RatingsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::catalog::{summarize_ratings, CatalogQuery, CatalogView};

/// GET /api/v1/catalog
///
/// Fetches dapps and ratings, then returns the view the page renders.
/// A rating source failure still returns 200 with every average at 0.
pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CatalogParams>,
) -> ApiResult<Json<CatalogView>> {
    let dapps = state.loader.load().await?;

    let platform = if params.all_platforms {
        None
    } else {
        Some(params.platform.unwrap_or_else(|| state.platform.clone()))
    };

    let query = CatalogQuery {
        search: params.search,
        platform,
    };

    let view = CatalogView::build(&dapps, &query);
    tracing::debug!(visible = view.len(), total = view.total, "Catalog view built");

    Ok(Json(view))
}

/// GET /api/v1/dapps
pub async fn list_dapps(State(state): State<Arc<AppState>>) -> ApiResult<Json<DappListResponse>> {
    let dapps = state.loader.load().await?;

    Ok(Json(DappListResponse {
        total: dapps.len(),
        dapps,
    }))
}

/// GET /api/v1/ratings
///
/// Unlike the catalog, a rating source failure is an error here.
pub async fn list_ratings(State(state): State<Arc<AppState>>) -> ApiResult<Json<RatingsResponse>> {
    let events = state.loader.load_ratings().await?;

    let mut ratings: Vec<RatingSummaryDto> = summarize_ratings(&events)
        .into_iter()
        .map(|(id, summary)| RatingSummaryDto::new(id, &summary))
        .collect();
    ratings.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| a.dapp_id.cmp(&b.dapp_id))
    });

    Ok(Json(RatingsResponse {
        ratings,
        events: events.len(),
    }))
}
