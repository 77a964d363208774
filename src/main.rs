//! Pizza Menu Frontend Entry Point

use leptos::prelude::*;
use pizza_menu_ui::{app::App, config};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(config::log_level()) {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
