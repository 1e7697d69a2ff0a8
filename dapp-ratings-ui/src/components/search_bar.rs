//! Search Bar Component

use leptos::*;

/// Project name search box bound to a signal
#[component]
pub fn SearchBar(search: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center mt-4">
            <input
                type="text"
                placeholder="Enter project name"
                class="w-full max-w-md px-4 py-2 border-2 rounded focus:outline-none focus:border-[#7e5bc2] shadow"
                style="border-color: #7e5bc2; box-shadow: 0 0 5px #7e5bc2"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
        </div>
    }
}
