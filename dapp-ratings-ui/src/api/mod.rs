//! API Access
//!
//! HTTP calls to the Dapp Ratings server.

mod client;

pub use client::fetch_catalog;
