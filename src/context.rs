//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, Command, Notice};
use crate::config::ListConfig;
use crate::list_store::ListStore;
use crate::storage::BrowserStore;

pub type BrowserList = ListStore<BrowserStore>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The shopping list, persisted to localStorage
    list: RwSignal<BrowserList>,
    /// Notice currently shown to the user
    notice: RwSignal<Option<Notice>>,
    /// Bumped per notice so an old timer never hides a newer one
    notice_seq: RwSignal<u32>,
    config: StoredValue<ListConfig>,
}

impl AppContext {
    pub fn new(config: ListConfig) -> Self {
        let list = ListStore::new(BrowserStore, config.storage_key.clone());
        Self {
            list: RwSignal::new(list),
            notice: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
            config: StoredValue::new(config),
        }
    }

    /// Read-only view for renderers
    pub fn list(&self) -> Signal<BrowserList> {
        self.list.read_only().into()
    }

    pub fn notice(&self) -> ReadSignal<Option<Notice>> {
        self.notice.read_only()
    }

    pub fn config(&self) -> ListConfig {
        self.config.get_value()
    }

    /// Run one command against the list and surface its notice.
    /// Returns true when the command succeeded.
    pub fn dispatch(&self, command: Command) -> bool {
        let outcome = self.list.try_update(|store| commands::dispatch(store, command));
        match outcome {
            Some(Ok(notice)) => {
                if let Some(notice) = notice {
                    self.notify(notice);
                }
                true
            }
            Some(Err(err)) => {
                self.notify(Notice::from(&err));
                false
            }
            None => false,
        }
    }

    /// Startup load: a missing list is not worth a notice
    pub fn autoload(&self) {
        let outcome = self.list.try_update(|store| store.load());
        if let Some(Err(err)) = outcome {
            self.notify(Notice::error(err.to_string()));
        }
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    fn notify(&self, notice: Notice) {
        self.notice_seq.update(|seq| *seq = seq.wrapping_add(1));
        let seq = self.notice_seq.get_untracked();
        self.notice.set(Some(notice));

        let timeout_ms = self.config.with_value(|config| config.notice_timeout_ms);
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if ctx.notice_seq.get_untracked() == seq {
                ctx.notice.set(None);
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
