//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::catalog::{DappData, DappId, RatingSummary};

// ============================================
// CATALOG DTOs
// ============================================

/// Query string for `GET /api/v1/catalog`
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    /// Free-text name search
    #[serde(default)]
    pub search: Option<String>,
    /// Platform tag, defaults to the configured platform
    #[serde(default)]
    pub platform: Option<String>,
    /// Show every platform, ignoring `platform`
    #[serde(default)]
    pub all_platforms: bool,
}

/// Enriched dapp list
#[derive(Debug, Serialize, Deserialize)]
pub struct DappListResponse {
    pub dapps: Vec<DappData>,
    pub total: usize,
}

// ============================================
// RATING DTOs
// ============================================

/// Rating aggregate for one dapp
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingSummaryDto {
    pub dapp_id: DappId,
    pub count: u64,
    pub average: f64,
}

impl RatingSummaryDto {
    pub fn new(dapp_id: DappId, summary: &RatingSummary) -> Self {
        Self {
            dapp_id,
            count: summary.count,
            average: summary.average(),
        }
    }
}

/// Per-dapp rating aggregates
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingsResponse {
    /// Highest rated first
    pub ratings: Vec<RatingSummaryDto>,
    /// Number of raw rating events
    pub events: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Platform featured by default
    pub platform: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
