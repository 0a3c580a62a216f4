//! New Item Form Component
//!
//! Form for adding items with optional quantity and unit price.

use leptos::html;
use leptos::prelude::*;

use crate::commands::Command;
use crate::context::use_app_context;

/// Form for adding a new item to the end of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let currency = ctx.config().currency;

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let (price, set_price) = signal(String::new());
    let name_input = NodeRef::<html::Input>::new();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let command = Command::add_from_form(&name.get(), &quantity.get(), &price.get());
        if ctx.dispatch(command) {
            set_name.set(String::new());
            set_quantity.set(String::from("1"));
            set_price.set(String::new());
        }
        if let Some(input) = name_input.get() {
            if let Err(err) = input.focus() {
                log::debug!("could not refocus name input: {:?}", err);
            }
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                class="item-input"
                placeholder="Item name..."
                node_ref=name_input
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                class="quantity-input"
                min="1"
                step="1"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="price-input"
                inputmode="decimal"
                placeholder=format!("Price ({})", currency)
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
