//! List Store
//!
//! Owns the ordered shopping list and its persistence slot.
//! Items are addressed by position; display order is insertion order.

use log::{debug, info, warn};

use crate::error::{EmptyNameError, StorageError, StorageResult};
use crate::models::{valid_price, Item};
use crate::storage::KeyValueStore;

/// The authoritative in-memory list plus the slot it is saved to
#[derive(Clone, Debug)]
pub struct ListStore<S> {
    items: Vec<Item>,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Create an empty list persisted under `key`
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Sum of `price * quantity` over priced items not yet bought
    pub fn total(&self) -> f64 {
        self.items.iter().map(Item::outstanding).sum()
    }

    /// Append a new pending item. Quantity defaults to 1; a quantity of 0
    /// is raised to 1. A non-finite or non-positive price is dropped.
    pub fn add(
        &mut self,
        name: &str,
        quantity: Option<u32>,
        price: Option<f64>,
    ) -> Result<(), EmptyNameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EmptyNameError);
        }
        let quantity = quantity.unwrap_or(1).max(1);
        let price = valid_price(price);
        debug!("add {:?} x{} price={:?}", name, quantity, price);
        self.items.push(Item::new(name.to_string(), quantity, price));
        Ok(())
    }

    /// Flip `completed` of the item at `index`. Returns false (and changes
    /// nothing) when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.completed = !item.completed;
                debug!("toggle #{} -> completed={}", index, item.completed);
                true
            }
            None => {
                debug!("toggle #{} ignored, list has {} items", index, self.items.len());
                false
            }
        }
    }

    /// Remove the item at `index`, shifting later items down. Returns false
    /// (and changes nothing) when the index is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            debug!("remove #{} ignored, list has {} items", index, self.items.len());
            return false;
        }
        let removed = self.items.remove(index);
        debug!("remove #{} {:?}", index, removed.name);
        true
    }

    /// Drop every item. Confirmation is the caller's job.
    pub fn clear(&mut self) {
        debug!("clear {} items", self.items.len());
        self.items.clear();
    }

    /// Write the whole list to the slot. The in-memory list is untouched
    /// whether or not the write succeeds.
    pub fn save(&self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.items)
            .map_err(|e| StorageError::Malformed(e.to_string()))?;
        match self.storage.set(&self.key, &json) {
            Ok(()) => {
                info!("saved {} items to {:?}", self.items.len(), self.key);
                Ok(())
            }
            Err(e) => {
                warn!("save to {:?} failed: {}", self.key, e);
                Err(e)
            }
        }
    }

    /// Replace the list with the saved one.
    ///
    /// Returns `Ok(false)` without touching the list when nothing is saved.
    /// Corrupted content is rejected as a whole with
    /// `StorageError::Malformed`; the current list is kept.
    pub fn load(&mut self) -> StorageResult<bool> {
        let raw = match self.storage.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                info!("no saved list under {:?}", self.key);
                return Ok(false);
            }
        };

        let items = parse_saved(&raw).map_err(|e| {
            warn!("saved list under {:?} rejected: {}", self.key, e);
            e
        })?;
        info!("loaded {} items from {:?}", items.len(), self.key);
        self.items = items;
        Ok(true)
    }
}

fn parse_saved(raw: &str) -> StorageResult<Vec<Item>> {
    let items: Vec<Item> =
        serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;
    if let Some(position) = items.iter().position(|item| !item.is_valid()) {
        return Err(StorageError::Malformed(format!("invalid item at position {}", position)));
    }
    Ok(items)
}
