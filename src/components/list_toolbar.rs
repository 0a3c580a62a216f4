//! List Toolbar Component
//!
//! Clear, save and load actions.

use leptos::prelude::*;

use crate::commands::Command;
use crate::components::ConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn ListToolbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="list-toolbar">
            <ConfirmButton
                label="Clear list"
                prompt="Clear the whole list?"
                button_class="clear-btn"
                on_confirm=move |_| {
                    ctx.dispatch(Command::Clear);
                }
            />
            <button class="save-btn" on:click=move |_| {
                ctx.dispatch(Command::Save);
            }>"Save"</button>
            <button class="load-btn" on:click=move |_| {
                ctx.dispatch(Command::Load);
            }>"Load"</button>
        </div>
    }
}
