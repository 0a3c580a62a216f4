//! Shopping List App
//!
//! Root component: form, list, summary and toolbar.

use leptos::prelude::*;

use crate::components::{ItemList, ListSummary, ListToolbar, NewItemForm, NoticeBanner};
use crate::config::ListConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ListConfig::default();
    let autoload = config.autoload;

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Restore the saved list once on mount
    if autoload {
        Effect::new(move |_| ctx.autoload());
    }

    view! {
        <main class="shopping-list">
            <h1>"Shopping List"</h1>

            <NoticeBanner />

            <NewItemForm />

            <ItemList />

            <ListSummary />

            <ListToolbar />
        </main>
    }
}
