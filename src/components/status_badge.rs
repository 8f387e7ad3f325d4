//! Status Badge Component

use leptos::prelude::*;

use crate::models::BadgeVariant;

/// Status text styled by its classification
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = BadgeVariant::for_status(&status).class();
    view! { <span class=class>{status}</span> }
}
