//! Session Storage
//!
//! Tab-scoped key/value backends and the pizza list adapter on top of them.

mod backend;
mod pizza_storage;

pub use backend::{BrowserSessionStore, MemorySessionStore, SessionStore};
pub use pizza_storage::PizzaStorage;
