//! List Configuration
//!
//! Static settings provided via Leptos context.

/// Slot the list is saved under
pub const DEFAULT_STORAGE_KEY: &str = "shoppingList";

#[derive(Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Durable store slot key
    pub storage_key: String,
    /// Prefix for prices and the total
    pub currency: String,
    /// Load the saved list once on startup
    pub autoload: bool,
    /// How long a notice stays visible
    pub notice_timeout_ms: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: "R$".to_string(),
            autoload: true,
            notice_timeout_ms: 3000,
        }
    }
}
