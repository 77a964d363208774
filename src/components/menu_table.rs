//! Menu Table Component
//!
//! Renders the working list, one row per pizza keyed by name.

use leptos::prelude::*;

use crate::config::PEPPER_ICON;
use crate::context::use_menu_context;
use crate::models::PizzaEntry;

#[component]
pub fn MenuTable() -> impl IntoView {
    let ctx = use_menu_context();

    view! {
        <table class="pizza-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Heat"</th>
                    <th>"Toppings"</th>
                    <th>"Photo"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody id="pizza_menu">
                <For
                    each=move || ctx.pizzas()
                    key=|pizza| pizza.name.clone()
                    children=move |pizza| view! { <PizzaRow pizza=pizza /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn PizzaRow(pizza: PizzaEntry) -> impl IntoView {
    let ctx = use_menu_context();
    // Handler bound to the row's name, not its position
    let name = pizza.name.clone();

    let peppers = (0..pizza.heat.max(0))
        .map(|_| view! { <img src=PEPPER_ICON width="20" height="20" alt="pepper" /> })
        .collect_view();

    view! {
        <tr>
            <td>{pizza.name.clone()}</td>
            <td>{pizza.price.to_string()}</td>
            <td class="heat">{peppers}</td>
            <td>{pizza.toppings.join(", ")}</td>
            <td>
                <img src=pizza.photo_src() width="200" height="200" alt=pizza.name.clone() />
            </td>
            <td>
                <button
                    class="remove-btn"
                    on:click=move |_| ctx.request_removal(name.clone())
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
