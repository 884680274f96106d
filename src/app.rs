//! Task List App
//!
//! Wires the core controller to the page and lays out the components.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;
use tasklist_core::ListController;

use crate::components::{Announcer, NewItemForm, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{StoreSink, UiState, UiStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);

    let mut controller = ListController::new(StoreSink::new(store, config.announcement_clear_ms));
    controller.render_initial();

    let input_ref = NodeRef::<html::Input>::new();
    provide_context(AppContext::new(controller, input_ref, config.confirm_before_delete));

    let summary = move || {
        store
            .view()
            .with(|payload| format!("{} tasks, {} completed", payload.total, payload.completed))
    };

    view! {
        <main class="todo-app">
            <h1>{config.title}</h1>
            <NewItemForm />
            <TaskList />
            <p class="item-count">{summary}</p>
            <Announcer />
        </main>
    }
}
