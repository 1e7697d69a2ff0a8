//! UI Components
//!
//! Reusable Leptos components for the catalog page.

pub mod dapp_card;
pub mod loading;
pub mod register_prompt;
pub mod search_bar;
pub mod star_rating;

pub use dapp_card::DappCard;
pub use loading::{ErrorBanner, Loading};
pub use register_prompt::RegisterPrompt;
pub use search_bar::SearchBar;
pub use star_rating::StarRating;
