//! Item List Component
//!
//! Renders the whole list in insertion order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::models::Item;

/// The list of items, redrawn after every mutation
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let list = ctx.list();

    let rows = move || {
        list.with(|store| {
            store
                .items()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<(usize, Item)>>()
        })
    };
    let is_empty = move || list.with(|store| store.is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class="empty-list">"Your list is empty."</p> }
        >
            <ul class="item-list">
                <For
                    each=rows
                    // Any field change must produce a new key so the row re-renders
                    key=|(index, item)| (
                        *index,
                        item.name.clone(),
                        item.quantity,
                        item.price.map(f64::to_bits),
                        item.completed,
                    )
                    children=|(index, item)| view! { <ItemRow index=index item=item /> }
                />
            </ul>
        </Show>
    }
}
