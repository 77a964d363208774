//! Sort Form Component
//!
//! Field picker; submitting the same field again flips the direction.

use leptos::prelude::*;

use crate::context::use_menu_context;
use crate::models::{SortDirection, SortField};

#[component]
pub fn SortForm() -> impl IntoView {
    let ctx = use_menu_context();
    let (sort_by, set_sort_by) = signal(SortField::Name.as_str().to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match sort_by.get_untracked().parse::<SortField>() {
            Ok(field) => ctx.sort(field),
            Err(e) => log::warn!("{}", e),
        }
    };

    // Nothing shown until a sort has actually run
    let current = move || {
        let state = ctx.sort_state();
        state.field.map(|field| {
            let arrow = match state.direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            };
            format!("{} {}", field.label(), arrow)
        })
    };

    view! {
        <form class="sort-form" on:submit=on_submit>
            <label for="sortby">"Sort by"</label>
            <select
                id="sortby"
                name="sortby"
                prop:value=move || sort_by.get()
                on:change=move |ev| set_sort_by.set(event_target_value(&ev))
            >
                {SortField::ALL.iter().map(|field| view! {
                    <option value=field.as_str()>{field.label()}</option>
                }).collect_view()}
            </select>
            <button type="submit">"Sort"</button>
            <span class="sort-state">{current}</span>
        </form>
    }
}
