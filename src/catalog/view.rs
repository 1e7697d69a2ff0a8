//! Catalog view
//!
//! Derives what gets shown from a fetched dapp list: sorted by average
//! rating, narrowed to one platform and to the current search term. The
//! fetched list itself is never mutated.

use serde::{Deserialize, Serialize};

use super::types::{DappData, DappId};

/// Platform tag the catalog features by default
pub const FEATURED_PLATFORM: &str = "farcaster";

/// Where users go to register a project missing from the catalog
pub const REGISTER_PROJECT_PATH: &str = "/register-project";

/// Number of symbols in the star indicator
pub const MAX_STARS: u8 = 5;

/// Case-insensitive substring match against the dapp name
pub fn matches_search(dapp: &DappData, term: &str) -> bool {
    dapp.name.to_lowercase().contains(&term.to_lowercase())
}

/// Narrow a list to the dapps whose name matches the search term
pub fn filter_by_search<'a>(dapps: &'a [DappData], term: &str) -> Vec<&'a DappData> {
    dapps.iter().filter(|dapp| matches_search(dapp, term)).collect()
}

/// Case-insensitive platform tag comparison
pub fn is_on_platform(dapp: &DappData, platform: &str) -> bool {
    dapp.platform.to_lowercase() == platform.to_lowercase()
}

/// Sort descending by average rating
pub fn sort_by_rating(dapps: &mut [&DappData]) {
    dapps.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
}

/// Star count shown for an average, rounded to the nearest integer
pub fn rounded_stars(average_rating: f64) -> u8 {
    if !average_rating.is_finite() || average_rating <= 0.0 {
        return 0;
    }
    average_rating.round().min(f64::from(MAX_STARS)) as u8
}

/// Five-symbol star indicator, filled stars first
pub fn star_symbols(average_rating: f64) -> String {
    let filled = rounded_stars(average_rating);
    (0..MAX_STARS)
        .map(|i| if i < filled { '★' } else { '☆' })
        .collect()
}

/// Link to the rating submission page for a dapp
pub fn rate_link(dapp_id: &DappId) -> String {
    format!("/rate-dapp?dappId={}", urlencoding::encode(dapp_id.as_str()))
}

/// Filters applied when building a view
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    /// Free-text name search
    #[serde(default)]
    pub search: Option<String>,
    /// Platform tag; `None` shows every platform
    #[serde(default)]
    pub platform: Option<String>,
}

impl CatalogQuery {
    /// Query restricted to the featured platform
    pub fn featured() -> Self {
        Self {
            search: None,
            platform: Some(FEATURED_PLATFORM.to_string()),
        }
    }

    /// Builder method: set search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Builder method: set platform
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}

/// A dapp as rendered in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub dapp: DappData,
    /// Rounded star count, 0-5
    pub stars: u8,
    /// Rating submission link
    pub rate_url: String,
}

impl CatalogEntry {
    pub fn new(dapp: DappData) -> Self {
        Self {
            stars: rounded_stars(dapp.average_rating),
            rate_url: rate_link(&dapp.dapp_id),
            dapp,
        }
    }
}

/// The derived, user-filterable view over one fetch cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// Visible dapps, highest rated first
    pub dapps: Vec<CatalogEntry>,
    /// Dapps fetched before any filtering
    pub total: usize,
    pub platform: Option<String>,
    pub search: Option<String>,
    /// Call-to-action target when nothing is visible
    pub register_url: String,
}

impl CatalogView {
    /// Sort, then filter by platform, then filter by search term
    pub fn build(dapps: &[DappData], query: &CatalogQuery) -> Self {
        let mut visible: Vec<&DappData> = dapps.iter().collect();
        sort_by_rating(&mut visible);

        let entries = visible
            .into_iter()
            .filter(|dapp| {
                query
                    .platform
                    .as_deref()
                    .map_or(true, |platform| is_on_platform(dapp, platform))
            })
            .filter(|dapp| {
                query
                    .search
                    .as_deref()
                    .map_or(true, |term| matches_search(dapp, term))
            })
            .cloned()
            .map(CatalogEntry::new)
            .collect();

        Self {
            dapps: entries,
            total: dapps.len(),
            platform: query.platform.clone(),
            search: query.search.clone(),
            register_url: REGISTER_PROJECT_PATH.to_string(),
        }
    }

    /// Whether the registration call-to-action should be shown instead
    pub fn is_empty(&self) -> bool {
        self.dapps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dapps.len()
    }
}
