//! State Management
//!
//! Reactive state for the catalog page.

pub mod catalog;

pub use catalog::{CatalogEntry, CatalogState};
