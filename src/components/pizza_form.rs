//! Pizza Form Component
//!
//! Collects a new pizza, validates it and hands it to the menu. The form
//! resets only when the pizza was accepted.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{MAX_HEAT, MIN_HEAT, PHOTOS, TOPPINGS};
use crate::context::use_menu_context;
use crate::models::{photo_src, PizzaForm};

fn default_photo() -> String {
    PHOTOS.first().map(|(value, _)| value.to_string()).unwrap_or_default()
}

/// Values of every selected `<option>` in a multi-select
fn selected_values(ev: &web_sys::Event) -> Vec<String> {
    let Some(select) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
    else {
        return Vec::new();
    };
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

#[component]
pub fn PizzaFormView() -> impl IntoView {
    let ctx = use_menu_context();

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (heat, set_heat) = signal(MIN_HEAT.to_string());
    let (toppings, set_toppings) = signal(Vec::<String>::new());
    let (photo, set_photo) = signal(default_photo());
    let (error, set_error) = signal::<Option<String>>(None);

    let reset = move || {
        set_name.set(String::new());
        set_price.set(String::new());
        set_heat.set(MIN_HEAT.to_string());
        set_toppings.set(Vec::new());
        set_photo.set(default_photo());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = PizzaForm {
            name: name.get_untracked(),
            price: price.get_untracked(),
            heat: heat.get_untracked(),
            toppings: toppings.get_untracked(),
            photo: photo.get_untracked(),
        };

        match form.into_entry().and_then(|pizza| ctx.submit(pizza)) {
            Ok(()) => {
                set_error.set(None);
                reset();
            }
            Err(e) => {
                log::log!(e.log_level(), "pizza not added: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form id="pizza_form" class="pizza-form" on:submit=on_submit>
            <label>
                "Name"
                <input
                    type="text"
                    name="name"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Price"
                <input
                    type="number"
                    name="price"
                    min="0"
                    step="0.01"
                    required=true
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Heat"
                <select
                    name="heat"
                    prop:value=move || heat.get()
                    on:change=move |ev| set_heat.set(event_target_value(&ev))
                >
                    {(MIN_HEAT..=MAX_HEAT).map(|level| view! {
                        <option value=level.to_string()>{level.to_string()}</option>
                    }).collect_view()}
                </select>
            </label>

            <label>
                "Toppings"
                <select
                    name="toppings"
                    multiple=true
                    on:change=move |ev| set_toppings.set(selected_values(&ev))
                >
                    {TOPPINGS.iter().map(|(value, label)| {
                        let val = value.to_string();
                        view! {
                            <option
                                value=*value
                                prop:selected=move || toppings.get().contains(&val)
                            >
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>

            <label>
                "Photo"
                <select
                    id="photo"
                    name="photo"
                    prop:value=move || photo.get()
                    on:change=move |ev| set_photo.set(event_target_value(&ev))
                >
                    {PHOTOS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </label>
            <img
                id="pizza_photo"
                src=move || photo_src(&photo.get())
                width="200"
                height="200"
                alt="Pizza photo preview"
            />

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <button type="submit">"Add pizza"</button>
        </form>
    }
}
