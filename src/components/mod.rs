//! UI Components
//!
//! Leptos components that render the list and forward user events.

mod confirm_button;
mod item_list;
mod item_row;
mod list_summary;
mod list_toolbar;
mod new_item_form;
mod notice_banner;

pub use confirm_button::ConfirmButton;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use list_summary::ListSummary;
pub use list_toolbar::ListToolbar;
pub use new_item_form::NewItemForm;
pub use notice_banner::NoticeBanner;
