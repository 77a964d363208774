//! Pizza List Storage
//!
//! Mirrors the pizza list into a single session store key as a JSON array.

use serde_json::Value;

use crate::config::STORAGE_KEY;
use crate::error::{MenuError, MenuResult};
use crate::models::PizzaEntry;
use super::backend::SessionStore;

/// Serialized mirror of the pizza list
pub struct PizzaStorage<S> {
    store: S,
    key: &'static str,
}

impl<S: SessionStore> PizzaStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store, key: STORAGE_KEY }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored list.
    ///
    /// Never fails: missing, unparsable, or non-array content reads as an
    /// empty list. Array elements that do not match the record schema are
    /// dropped one by one.
    pub fn load(&self) -> Vec<PizzaEntry> {
        let Some(raw) = self.store.get_item(self.key) else {
            log::debug!("no stored menu under \"{}\"", self.key);
            return Vec::new();
        };

        let values = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(values)) => values,
            Ok(other) => {
                log::warn!("stored menu is not a list ({}), starting empty", kind_of(&other));
                return Vec::new();
            }
            Err(e) => {
                log::warn!("stored menu is not valid JSON ({}), starting empty", e);
                return Vec::new();
            }
        };

        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<PizzaEntry>(value) {
                Ok(pizza) => Some(pizza),
                Err(e) => {
                    log::warn!("dropping stored pizza #{}: {}", index, e);
                    None
                }
            })
            .collect()
    }

    /// Overwrite the stored list with `pizzas`
    pub fn save(&self, pizzas: &[PizzaEntry]) -> MenuResult<()> {
        let json = serde_json::to_string(pizzas)
            .map_err(|e| MenuError::Storage(format!("serialization failed: {}", e)))?;
        self.store.set_item(self.key, &json)
    }

    /// Session start: load, then write the normalized list straight back
    pub fn init(&self) -> Vec<PizzaEntry> {
        let pizzas = self.load();
        if let Err(e) = self.save(&pizzas) {
            log::error!("failed to normalize stored menu: {}", e);
        }
        log::info!("loaded {} pizzas from session storage", pizzas.len());
        pizzas
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
