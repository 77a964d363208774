//! Menu Context
//!
//! The session's menu manager plus view-only state, shared with every
//! component through the Leptos Context API.

use leptos::prelude::*;

use crate::error::MenuResult;
use crate::menu::MenuManager;
use crate::models::{PizzaEntry, SortField, SortState};
use crate::storage::BrowserSessionStore;

pub type SessionMenu = MenuManager<BrowserSessionStore>;

/// App-wide menu handle provided via context
#[derive(Clone, Copy)]
pub struct MenuContext {
    menu: RwSignal<SessionMenu>,
    /// Pizza waiting for removal confirmation - read
    pub pending_removal: ReadSignal<Option<String>>,
    /// Pizza waiting for removal confirmation - write
    set_pending_removal: WriteSignal<Option<String>>,
}

impl MenuContext {
    pub fn new(
        menu: RwSignal<SessionMenu>,
        pending_removal: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            menu,
            pending_removal: pending_removal.0,
            set_pending_removal: pending_removal.1,
        }
    }

    /// Working list in display order (tracked)
    pub fn pizzas(&self) -> Vec<PizzaEntry> {
        self.menu.with(|menu| menu.pizzas().to_vec())
    }

    pub fn sort_state(&self) -> SortState {
        self.menu.with(|menu| menu.sort_state())
    }

    /// Validate and add a pizza
    pub fn submit(&self, pizza: PizzaEntry) -> MenuResult<()> {
        let mut result = Ok(());
        self.menu.update(|menu| result = menu.submit(pizza));
        result
    }

    pub fn sort(&self, field: SortField) {
        self.menu.update(|menu| menu.sort(field));
    }

    /// Open the confirmation dialog for `name`
    pub fn request_removal(&self, name: String) {
        self.set_pending_removal.set(Some(name));
    }

    pub fn cancel_removal(&self) {
        self.set_pending_removal.set(None);
    }

    /// Remove the pending pizza and close the dialog
    pub fn confirm_removal(&self) {
        if let Some(name) = self.pending_removal.get_untracked() {
            self.menu.update(|menu| {
                if let Err(e) = menu.remove(&name) {
                    log::error!("failed to remove \"{}\": {}", name, e);
                }
            });
        }
        self.set_pending_removal.set(None);
    }
}

/// Get the menu context
pub fn use_menu_context() -> MenuContext {
    expect_context::<MenuContext>()
}
