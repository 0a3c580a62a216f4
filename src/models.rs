//! Frontend Models
//!
//! Shopping list entries and their persisted shape.

use serde::{Deserialize, Serialize};

/// One entry of the shopping list
///
/// Serialized as `{"name", "quantity", "price", "completed"}`.
/// Lists written with the older text-only layout (`{"text", "completed"}`)
/// still deserialize: `text` is an alias of `name` and the rest default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "text")]
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Unit price; `None` means the price is not tracked
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub completed: bool,
}

fn default_quantity() -> u32 {
    1
}

/// Keep a price only if it is finite and positive
pub fn valid_price(price: Option<f64>) -> Option<f64> {
    price.filter(|price| price.is_finite() && *price > 0.0)
}

impl Item {
    /// Create a pending item. `name` must already be trimmed and non-empty.
    pub fn new(name: String, quantity: u32, price: Option<f64>) -> Self {
        Self {
            name,
            quantity,
            price,
            completed: false,
        }
    }

    /// Price times quantity, if a price is tracked
    pub fn subtotal(&self) -> Option<f64> {
        self.price.map(|price| price * f64::from(self.quantity))
    }

    /// Amount this item still adds to the bill
    pub fn outstanding(&self) -> f64 {
        if self.completed {
            0.0
        } else {
            self.subtotal().unwrap_or(0.0)
        }
    }

    /// Check the invariants a stored item must satisfy
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.quantity >= 1
            && (self.price.is_none() || valid_price(self.price).is_some())
    }
}

/// Format a money amount with two decimals, e.g. `R$ 7.00`
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}

/// Row label, e.g. `Milk (2x)`
pub fn item_label(item: &Item) -> String {
    format!("{} ({}x)", item.name, item.quantity)
}
