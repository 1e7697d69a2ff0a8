//! Home Page
//!
//! The rated dapp catalog for the featured platform, searchable by name.

use leptos::*;

use crate::api;
use crate::components::{DappCard, ErrorBanner, Loading, RegisterPrompt, SearchBar};
use crate::state::CatalogState;

/// Catalog page component
#[component]
pub fn Home() -> impl IntoView {
    let state = CatalogState::new();
    let visible = state.visible();

    // One fetch per visit; search only filters what is already loaded
    create_effect(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_catalog().await {
                Ok(dapps) => {
                    state.all_dapps.set(Some(dapps));
                    state.error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch catalog: {}", e).into());
                    state.error.set(Some(e));
                }
            }

            state.loading.set(false);
        });
    });

    view! {
        <div class="container mx-auto p-4 space-y-4">
            <h1 class="text-2xl font-bold mb-4 text-center" style="color: #7e5bc2">
                "Rate your experience with Farcaster!"
            </h1>

            <div>
                <h2 class="text-lg font-semibold text-center">"Search for a project:"</h2>
                <SearchBar search=state.search />
            </div>

            {move || {
                if state.loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(message) = state.error.get() {
                    view! { <ErrorBanner message=message /> }.into_view()
                } else if visible.with(Vec::is_empty) {
                    view! { <RegisterPrompt /> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            <For
                                each=move || visible.get()
                                key=|dapp| dapp.dapp_id.clone()
                                children=move |dapp| view! { <DappCard dapp=dapp /> }
                            />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
