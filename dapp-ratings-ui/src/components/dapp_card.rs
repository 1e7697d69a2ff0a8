//! Dapp Card Component
//!
//! One catalog entry: icon, name, description, stars and links.

use leptos::*;

use super::StarRating;
use crate::state::catalog::CatalogEntry;

const ACCENT: &str = "color: #7e5bc2";

#[component]
pub fn DappCard(dapp: CatalogEntry) -> impl IntoView {
    // Broken icons are hidden rather than shown as a broken image
    let (icon_failed, set_icon_failed) = create_signal(false);

    let image_url = dapp.image_url.clone();
    let alt = format!("{} icon", dapp.name);
    let rate_href = dapp.rate_href();

    view! {
        <div class="border rounded-lg p-4 shadow hover:shadow-lg transition-shadow flex flex-col items-center">
            <div class="w-12 h-12 mb-2 flex items-center justify-center">
                {move || {
                    (!image_url.is_empty() && !icon_failed.get()).then(|| view! {
                        <img
                            src=image_url.clone()
                            alt=alt.clone()
                            class="max-w-full max-h-full object-contain"
                            on:error=move |_| set_icon_failed.set(true)
                        />
                    })
                }}
            </div>

            <h3 class="font-semibold text-lg text-center" style=ACCENT>
                {dapp.name.clone()}
            </h3>
            <p class="text-center mb-4">{dapp.description.clone()}</p>

            <StarRating average_rating=dapp.average_rating />

            <div class="flex justify-between items-center w-full mt-2">
                <a href=dapp.url.clone() class="text-blue-500 hover:underline" style=ACCENT>
                    "Visit Site"
                </a>
                <a href=rate_href class="text-blue-500 hover:underline" style=ACCENT>
                    "Rate This App"
                </a>
            </div>
        </div>
    }
}
