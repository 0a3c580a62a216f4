//! List Summary Component
//!
//! Progress counter and the amount still to spend.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::format_money;

#[component]
pub fn ListSummary() -> impl IntoView {
    let ctx = use_app_context();
    let currency = ctx.config().currency;
    let list = ctx.list();

    let progress = move || {
        list.with(|store| format!("{}/{} items", store.completed_count(), store.len()))
    };
    let total = move || list.with(|store| format_money(&currency, store.total()));

    view! {
        <div class="list-summary">
            <span class="item-count">{progress}</span>
            <span class="total">"Total: " <strong class="total-value">{total}</strong></span>
        </div>
    }
}
