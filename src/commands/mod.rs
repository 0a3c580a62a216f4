//! List Commands
//!
//! One handler per UI event. Each command runs exactly one `ListStore`
//! operation and reports what the user should be told.

mod input;

pub use input::{parse_price, parse_quantity, ItemIndex};

use log::debug;

use crate::error::ListError;
use crate::list_store::ListStore;
use crate::storage::KeyValueStore;

/// A user action against the list
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add {
        name: String,
        quantity: Option<u32>,
        price: Option<f64>,
    },
    Toggle(ItemIndex),
    Remove(ItemIndex),
    /// Issued only after the user confirmed
    Clear,
    Save,
    Load,
}

impl Command {
    /// Build an `Add` from the raw form fields
    pub fn add_from_form(name: &str, quantity: &str, price: &str) -> Self {
        Command::Add {
            name: name.to_string(),
            quantity: Some(parse_quantity(quantity)),
            price: parse_price(price),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice success",
            NoticeKind::Info => "notice info",
            NoticeKind::Error => "notice error",
        }
    }
}

/// Message for the notification surface
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

impl From<&ListError> for Notice {
    fn from(err: &ListError) -> Self {
        Notice::error(err.to_string())
    }
}

pub const SAVED_MESSAGE: &str = "List saved successfully!";
pub const LOADED_MESSAGE: &str = "List loaded successfully!";
pub const NOT_FOUND_MESSAGE: &str = "No saved list found in local storage.";

/// Apply `command` to `store`.
///
/// Mutations succeed silently; save and load always produce a notice.
/// On error the list is unchanged.
pub fn dispatch<S: KeyValueStore>(
    store: &mut ListStore<S>,
    command: Command,
) -> Result<Option<Notice>, ListError> {
    match command {
        Command::Add { name, quantity, price } => {
            store.add(&name, quantity, price)?;
            Ok(None)
        }
        Command::Toggle(index) => {
            match index.checked(store.len()) {
                Some(index) => {
                    store.toggle(index);
                }
                None => debug!("stale toggle index {}", index.get()),
            }
            Ok(None)
        }
        Command::Remove(index) => {
            match index.checked(store.len()) {
                Some(index) => {
                    store.remove(index);
                }
                None => debug!("stale remove index {}", index.get()),
            }
            Ok(None)
        }
        Command::Clear => {
            store.clear();
            Ok(None)
        }
        Command::Save => {
            store.save()?;
            Ok(Some(Notice::success(SAVED_MESSAGE)))
        }
        Command::Load => {
            if store.load()? {
                Ok(Some(Notice::success(LOADED_MESSAGE)))
            } else {
                Ok(Some(Notice::info(NOT_FOUND_MESSAGE)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EmptyNameError, StorageError};
    use crate::storage::MemoryStore;

    fn new_store() -> ListStore<MemoryStore> {
        ListStore::new(MemoryStore::new(), "shoppingList")
    }

    #[test]
    fn test_add_from_form() {
        assert_eq!(
            Command::add_from_form(" Milk ", "2", "3,50"),
            Command::Add {
                name: " Milk ".to_string(),
                quantity: Some(2),
                price: Some(3.5),
            }
        );
        assert_eq!(
            Command::add_from_form("Bread", "", ""),
            Command::Add {
                name: "Bread".to_string(),
                quantity: Some(1),
                price: None,
            }
        );
    }

    #[test]
    fn test_dispatch_add_and_empty_name() {
        let mut store = new_store();
        let notice = dispatch(&mut store, Command::add_from_form("Milk", "2", "3.5")).unwrap();
        assert_eq!(notice, None);
        assert_eq!(store.items()[0].name, "Milk");

        let err = dispatch(&mut store, Command::add_from_form("  ", "1", "")).unwrap_err();
        assert_eq!(err, ListError::EmptyName(EmptyNameError));
        assert_eq!(Notice::from(&err).kind, NoticeKind::Error);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_dispatch_stale_index_is_silent() {
        let mut store = new_store();
        dispatch(&mut store, Command::add_from_form("Milk", "1", "")).unwrap();

        assert_eq!(dispatch(&mut store, Command::Toggle(ItemIndex::from(5))), Ok(None));
        assert_eq!(dispatch(&mut store, Command::Remove(ItemIndex::from(1))), Ok(None));
        assert_eq!(store.len(), 1);
        assert!(!store.items()[0].completed);

        dispatch(&mut store, Command::Toggle(ItemIndex::from(0))).unwrap();
        assert!(store.items()[0].completed);
        dispatch(&mut store, Command::Remove(ItemIndex::from(0))).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_dispatch_save_and_load_notices() {
        let backing = MemoryStore::new();
        let mut store = ListStore::new(backing.clone(), "shoppingList");

        let notice = dispatch(&mut store, Command::Load).unwrap();
        assert_eq!(notice, Some(Notice::info(NOT_FOUND_MESSAGE)));

        dispatch(&mut store, Command::add_from_form("Milk", "2", "3.5")).unwrap();
        let notice = dispatch(&mut store, Command::Save).unwrap();
        assert_eq!(notice, Some(Notice::success(SAVED_MESSAGE)));

        dispatch(&mut store, Command::Clear).unwrap();
        assert!(store.is_empty());

        let notice = dispatch(&mut store, Command::Load).unwrap();
        assert_eq!(notice, Some(Notice::success(LOADED_MESSAGE)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_dispatch_load_error() {
        let backing = MemoryStore::new();
        backing.set("shoppingList", "{broken").unwrap();
        let mut store = ListStore::new(backing, "shoppingList");
        dispatch(&mut store, Command::add_from_form("Milk", "1", "")).unwrap();

        let err = dispatch(&mut store, Command::Load).unwrap_err();
        assert!(matches!(err, ListError::Storage(StorageError::Malformed(_))));
        assert!(Notice::from(&err).message.starts_with("Saved list is corrupted"));
        assert_eq!(store.len(), 1);
    }
}
