//! Durable Storage
//!
//! String-keyed slots the list is persisted into. The browser build uses
//! `window.localStorage`; unit tests use `MemoryStore`.

use wasm_bindgen::JsValue;

use crate::error::{StorageError, StorageResult};

/// A string-keyed durable store
pub trait KeyValueStore {
    /// Read a slot; `Ok(None)` when the slot was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every access
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error_text(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error_text(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected(js_error_text(&e)))
    }
}

/// Best-effort message for a thrown JS value (e.g. `QuotaExceededError`)
fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::KeyValueStore;
    use crate::error::StorageResult;

    /// In-memory store. Clones share the same slots, which lets a second
    /// `ListStore` observe what the first one saved.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStore {
        slots: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.slots.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
