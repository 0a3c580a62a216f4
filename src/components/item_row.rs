//! Item Row Component
//!
//! Individual entry in the shopping list.

use leptos::prelude::*;

use crate::commands::{Command, ItemIndex};
use crate::context::use_app_context;
use crate::models::{format_money, item_label, Item};

/// A single item row
#[component]
pub fn ItemRow(
    index: usize,
    item: Item,
) -> impl IntoView {
    let ctx = use_app_context();
    let currency = ctx.config().currency;

    let index = ItemIndex::from(index);
    let label = item_label(&item);
    let row_class = if item.completed { "item-row completed" } else { "item-row" };
    let subtotal = item.subtotal().map(|amount| format!("- {}", format_money(&currency, amount)));

    view! {
        <li class=row_class>
            <span class="item-text">
                {label}
                {subtotal.map(|text| view! { <span class="item-subtotal">" " {text}</span> })}
            </span>
            <div class="item-actions">
                <button
                    class="complete-btn"
                    title="Mark as bought"
                    on:click=move |_| {
                        ctx.dispatch(Command::Toggle(index));
                    }
                >
                    "✓"
                </button>
                <button
                    class="delete-btn"
                    title="Remove"
                    on:click=move |_| {
                        ctx.dispatch(Command::Remove(index));
                    }
                >
                    "×"
                </button>
            </div>
        </li>
    }
}
