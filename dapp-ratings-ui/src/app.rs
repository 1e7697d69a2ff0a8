//! App Root Component
//!
//! Routing for the catalog page.

use leptos::*;
use leptos_router::*;

use crate::pages::Home;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A href="/" class="hover:underline">
                <span style="color: #7e5bc2">"Back to the catalog"</span>
            </A>
        </div>
    }
}
