//! New Item Form Component
//!
//! Text input for adding tasks, with inline validation message.

use leptos::prelude::*;
use tasklist_core::{Command, ListError};

use crate::context::AppContext;
use crate::store::{store_set_input_error, use_app_store, UiStateStoreFields};

/// Shown when the input is blank on submit
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a task before adding.";

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();

        match ctx.dispatch(Command::Add(text)) {
            Some(Ok(item)) => {
                tracing::info!(id = %item.id, "Task added");
                set_new_text.set(String::new());
                store_set_input_error(&store, None);
            }
            Some(Err(ListError::Validation(e))) => {
                tracing::debug!(error = %e, "Add rejected");
                store_set_input_error(&store, Some(EMPTY_INPUT_MESSAGE.to_string()));
            }
            Some(Err(e)) => tracing::warn!(error = %e, "Unexpected add failure"),
            None => return,
        }
        ctx.focus_input();
    };

    view! {
        <form id="todo-form" class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <label for="new-todo-item" class="sr-only">"New task"</label>
                <input
                    type="text"
                    id="new-todo-item"
                    placeholder="Add a new task..."
                    autocomplete="off"
                    aria-describedby="error-message"
                    aria-invalid=move || store.input_error().with(|e| e.is_some().then_some("true"))
                    node_ref=ctx.input_ref
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            <p
                id="error-message"
                class="error-message"
                role="alert"
                hidden=move || store.input_error().with(|e| e.is_none())
            >
                {move || store.input_error().get().unwrap_or_default()}
            </p>
        </form>
    }
}
