//! Delete Confirm Button Component
//!
//! Inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a Delete button initially. When clicked, shows `prompt` with
/// Yes/No buttons. With `confirm` off, the first click deletes.
///
/// # Arguments
/// * `label` - Accessible name of the initial button
/// * `prompt` - Question shown while confirming
/// * `on_confirm` - Callback to execute once deletion is granted
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    confirm: bool,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-btn"
                aria-label=label.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    if confirm {
                        set_confirm_delete.set(true);
                    } else {
                        on_confirm.run(());
                    }
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm" role="group">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
