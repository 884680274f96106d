//! Task Row Component
//!
//! One task with its complete/undo and delete actions.

use leptos::prelude::*;
use tasklist_core::{Command, ItemView};

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

#[component]
pub fn TaskRow(item: ItemView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let row_class = if item.completed { "todo-item completed" } else { "todo-item" };
    let text_class = if item.completed { "todo-item-text completed" } else { "todo-item-text" };
    // Freshly added rows announce themselves
    let (role, live) = if item.live {
        (Some("status"), Some("polite"))
    } else {
        (None, None)
    };

    let on_toggle = move |_| {
        if let Some(Err(e)) = ctx.dispatch(Command::Toggle(id)) {
            tracing::warn!(error = %e, "Toggle on stale row");
        }
    };

    let on_delete = Callback::new(move |_: ()| {
        if let Some(Err(e)) = ctx.dispatch(Command::Remove(id)) {
            tracing::warn!(error = %e, "Delete on stale row");
        }
        ctx.focus_input();
    });

    view! {
        <li id=format!("todo-item-{}", id) class=row_class role=role aria-live=live>
            <span class=text_class aria-label=item.text_label>
                {item.text}
            </span>
            <div class="actions">
                <button class="complete-btn" aria-label=item.toggle_label on:click=on_toggle>
                    {item.action.button_text()}
                </button>
                <DeleteConfirmButton
                    label=item.delete_label
                    prompt=item.delete_prompt
                    confirm=ctx.confirm_before_delete
                    on_confirm=on_delete
                />
            </div>
        </li>
    }
}
