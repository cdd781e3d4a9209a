//! Small labeled metric card for the admin analytics row.

use leptos::prelude::*;

/// A titled value card.
#[component]
pub fn StatCard(title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__title">{title}</div>
            <div class="stat-card__value">{value}</div>
        </div>
    }
}
