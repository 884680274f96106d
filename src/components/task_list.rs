//! Task List Component
//!
//! Rebuilds every row from the latest payload.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul id="todo-list" class="todo-list">
            {move || {
                store
                    .view()
                    .with(|payload| payload.items.clone())
                    .into_iter()
                    .map(|item| view! { <TaskRow item=item /> })
                    .collect_view()
            }}
        </ul>
        <p
            id="no-tasks-message"
            class="no-tasks-message"
            hidden=move || !store.view().with(|payload| payload.is_empty)
        >
            "No tasks yet. Add one above!"
        </p>
    }
}
