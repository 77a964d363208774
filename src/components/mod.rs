//! UI Components
//!
//! Leptos components for the menu page.

mod pizza_form;
mod sort_form;
mod menu_table;
mod confirm_removal;

pub use pizza_form::PizzaFormView;
pub use sort_form::SortForm;
pub use menu_table::MenuTable;
pub use confirm_removal::ConfirmRemoval;
