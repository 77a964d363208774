//! Session Store Backends
//!
//! A string-keyed store scoped to the browser tab, plus an in-memory
//! stand-in for native hosts and tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{MenuError, MenuResult};

/// Tab-scoped string key/value store
pub trait SessionStore {
    /// Value for `key`, `None` when absent or unreadable
    fn get_item(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`
    fn set_item(&self, key: &str, value: &str) -> MenuResult<()>;
}

/// `window.sessionStorage` of the current tab.
///
/// The storage handle is looked up on every call, so the store itself holds
/// no JS objects and can live inside a Leptos signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
        let storage = session_storage()
            .ok_or_else(|| MenuError::Storage("sessionStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| MenuError::Storage(format!("{:?}", e)))
    }
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
