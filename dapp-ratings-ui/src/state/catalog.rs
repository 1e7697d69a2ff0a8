//! Catalog Page State
//!
//! Reactive state for the catalog page plus the pure helpers that derive
//! what is visible from it.

use leptos::*;

/// Platform the page features
pub const FEATURED_PLATFORM: &str = "farcaster";

/// Registration page for projects missing from the catalog
pub const REGISTER_PROJECT_PATH: &str = "/register-project";

/// A rated dapp as returned by `GET /api/v1/catalog`
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub dapp_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub stars: u8,
    #[serde(default)]
    pub rate_url: String,
}

impl CatalogEntry {
    /// Rating submission link, falling back to one built from the id
    pub fn rate_href(&self) -> String {
        if self.rate_url.is_empty() {
            format!("/rate-dapp?dappId={}", urlencoding::encode(&self.dapp_id))
        } else {
            self.rate_url.clone()
        }
    }
}

/// Page state: loading, then either data or an error
#[derive(Clone, Copy)]
pub struct CatalogState {
    /// Everything fetched this visit; `None` until the fetch succeeds
    pub all_dapps: RwSignal<Option<Vec<CatalogEntry>>>,
    /// Current search box contents
    pub search: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            all_dapps: create_rw_signal(None),
            search: create_rw_signal(String::new()),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
        }
    }

    /// Dapps matching the search term, recomputed when either input changes
    pub fn visible(&self) -> Memo<Vec<CatalogEntry>> {
        let all_dapps = self.all_dapps;
        let search = self.search;
        create_memo(move |_| {
            all_dapps.with(|dapps| {
                dapps
                    .as_deref()
                    .map(|dapps| visible_dapps(dapps, &search.get()))
                    .unwrap_or_default()
            })
        })
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match against the dapp name
pub fn matches_search(entry: &CatalogEntry, term: &str) -> bool {
    entry.name.to_lowercase().contains(&term.to_lowercase())
}

/// Sorted by average rating, featured platform only, matching the term
pub fn visible_dapps(dapps: &[CatalogEntry], term: &str) -> Vec<CatalogEntry> {
    let mut visible: Vec<CatalogEntry> = dapps
        .iter()
        .filter(|d| d.platform.to_lowercase() == FEATURED_PLATFORM)
        .filter(|d| matches_search(d, term))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    visible
}

/// Filled star count for an average rating
pub fn filled_stars(average_rating: f64) -> u8 {
    if !average_rating.is_finite() || average_rating <= 0.0 {
        0
    } else {
        average_rating.round().min(5.0) as u8
    }
}
