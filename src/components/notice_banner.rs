//! Notice Banner Component
//!
//! Shows the latest save/load/validation message.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let notice = ctx.notice();

    move || {
        notice.get().map(|notice| view! {
            <div class=notice.kind.css_class() role="status">
                <span>{notice.message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })
    }
}
