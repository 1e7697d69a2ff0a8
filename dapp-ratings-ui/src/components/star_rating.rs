//! Star Rating Component
//!
//! Five-symbol indicator, gold up to the rounded average, grey after.

use leptos::*;

use crate::state::catalog::filled_stars;

#[component]
pub fn StarRating(average_rating: f64) -> impl IntoView {
    let filled = filled_stars(average_rating);

    view! {
        <div class="text-yellow-500" title=format!("{:.1} / 5", average_rating)>
            {(0..5u8).map(|i| {
                let color = if i < filled { "gold" } else { "grey" };
                view! {
                    <span style=format!("color: {}; font-size: 24px", color)>"★"</span>
                }
            }).collect_view()}
        </div>
    }
}
