//! Status Banners
//!
//! Loading and error states for the catalog. Only one is ever shown.

use leptos::*;

/// Loading banner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-2 py-4">
            <span class="inline-block loading-spinner w-4 h-4" />
            <p class="text-center">"Loading..."</p>
        </div>
    }
}

/// Error banner
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="text-center text-red-500">{message}</p>
    }
}
