//! Confirm Removal Dialog
//!
//! Modal asking before a pizza leaves the menu.

use leptos::prelude::*;

use crate::context::use_menu_context;

/// Shown while a removal is pending; confirm removes, cancel just closes
#[component]
pub fn ConfirmRemoval() -> impl IntoView {
    let ctx = use_menu_context();

    view! {
        <Show when=move || ctx.pending_removal.get().is_some()>
            <div class="confirm-overlay">
                <div class="confirm-dialog">
                    <p class="confirm-text">
                        {move || format!(
                            "Remove \"{}\" from the menu?",
                            ctx.pending_removal.get().unwrap_or_default()
                        )}
                    </p>
                    <button class="confirm-btn" on:click=move |_| ctx.confirm_removal()>
                        "Remove"
                    </button>
                    <button class="cancel-btn" on:click=move |_| ctx.cancel_removal()>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}
