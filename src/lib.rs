//! Pizza Menu
//!
//! Session-scoped pizza menu editor:
//! - models/error: menu records and rejection reasons
//! - storage: session store backends and the pizza list mirror
//! - menu: the list manager
//! - context/components/app: Leptos view layer

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod menu;
pub mod context;
pub mod components;
pub mod app;
