//! Register Prompt Component
//!
//! Shown instead of the grid when nothing matches.

use leptos::*;
use leptos_router::*;

use crate::state::catalog::REGISTER_PROJECT_PATH;

#[component]
pub fn RegisterPrompt() -> impl IntoView {
    view! {
        <div class="text-center mt-4">
            <p>
                "Can't find what you're looking for? "
                <A href=REGISTER_PROJECT_PATH class="text-red-500 hover:underline">
                    <span style="color: #7e5bc2">"Register a new project"</span>
                </A>
                "."
            </p>
        </div>
    }
}
