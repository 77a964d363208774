//! Pizza Menu App
//!
//! Root component: form on top, sort controls, menu table, removal dialog.

use leptos::prelude::*;

use crate::components::{ConfirmRemoval, MenuTable, PizzaFormView, SortForm};
use crate::context::{MenuContext, SessionMenu};
use crate::storage::BrowserSessionStore;

#[component]
pub fn App() -> impl IntoView {
    // One manager per tab session
    let menu = RwSignal::new(SessionMenu::new(BrowserSessionStore));
    let pending_removal = signal::<Option<String>>(None);

    let ctx = MenuContext::new(menu, pending_removal);
    provide_context(ctx);

    view! {
        <div class="menu-layout">
            <h1>"Pizza Menu"</h1>

            <PizzaFormView />

            <SortForm />

            <MenuTable />

            <p class="pizza-count">{move || format!("{} pizzas", ctx.pizzas().len())}</p>

            <ConfirmRemoval />
        </div>
    }
}
