//! Dapp Ratings
//!
//! Community ratings page for Farcaster dapps, built with Leptos (WASM).
//!
//! The page asks the ratings API for the featured platform's catalog once
//! per visit, then filters it by project name as the user types. Each card
//! links out to the project and to the rating form.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
