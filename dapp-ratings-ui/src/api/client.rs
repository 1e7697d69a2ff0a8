//! HTTP API Client
//!
//! Functions for communicating with the Dapp Ratings REST API.

use gloo_net::http::Request;

use crate::state::catalog::{CatalogEntry, FEATURED_PLATFORM};

/// Default API base URL
const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

const API_BASE_STORAGE_KEY: &str = "dapp_ratings_api_url";

/// Get the API base URL from local storage or use default
fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten());

    let url = stored.unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct CatalogResponse {
    dapps: Vec<CatalogEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

const FETCH_FAILED: &str = "An error occurred while fetching DApp data";

// ============ API Functions ============

/// Fetch the rated catalog for the featured platform
///
/// The server runs the whole fetch cycle: dapps first, then ratings. A
/// ratings failure comes back as a normal response with zero averages.
pub async fn fetch_catalog() -> Result<Vec<CatalogEntry>, String> {
    let api_base = get_api_base();
    let url = format!(
        "{}/catalog?platform={}",
        api_base,
        urlencoding::encode(FEATURED_PLATFORM)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            web_sys::console::error_1(&format!("Network error: {}", e).into());
            FETCH_FAILED.to_string()
        })?;

    if !response.ok() {
        let message = response
            .json::<ApiErrorResponse>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| FETCH_FAILED.to_string());
        return Err(message);
    }

    let result: CatalogResponse = response
        .json()
        .await
        .map_err(|e| {
            web_sys::console::error_1(&format!("Parse error: {}", e).into());
            FETCH_FAILED.to_string()
        })?;

    Ok(result.dapps)
}
