//! Dapp Catalog
//!
//! Pure domain logic, no I/O:
//!
//! - **types**: Dapp records, rating events, ids
//! - **ratings**: Grouped mean over rating events and the merge into dapps
//! - **view**: Sorting, platform and search filtering, star rendering
//!
//! # Example
//!
//! ```rust
//! use dapp_ratings::catalog::*;
//!
//! let dapps = vec![
//!     DappData::new("1", "Foo").platform("farcaster"),
//!     DappData::new("2", "Bar").platform("farcaster"),
//! ];
//! let events = vec![DappRating::new("1", 5), DappRating::new("1", 3)];
//!
//! let merged = apply_ratings(dapps, &compute_average_ratings(&events));
//! let view = CatalogView::build(&merged, &CatalogQuery::featured().search("foo"));
//!
//! assert_eq!(view.dapps.len(), 1);
//! assert_eq!(view.dapps[0].dapp.average_rating, 4.0);
//! ```

pub mod ratings;
pub mod types;
pub mod view;

pub use ratings::{apply_ratings, compute_average_ratings, summarize_ratings, RatingSummary};
pub use types::{DappData, DappId, DappRating, RatingsMap};
pub use view::{
    filter_by_search, is_on_platform, matches_search, rate_link, rounded_stars, sort_by_rating,
    star_symbols, CatalogEntry, CatalogQuery, CatalogView, FEATURED_PLATFORM, MAX_STARS,
    REGISTER_PROJECT_PATH,
};
