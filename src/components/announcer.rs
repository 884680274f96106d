//! Screen Reader Announcer
//!
//! Visually hidden live region fed by the store's current announcement.

use leptos::prelude::*;

use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn Announcer() -> impl IntoView {
    let store = use_app_store();

    let politeness = move || store.announcement_politeness().get().as_str();
    let message = move || {
        store
            .announcement()
            .with(|note| note.as_ref().map(|note| note.message.clone()).unwrap_or_default())
    };

    view! {
        <div id="screen-reader-announcer" class="sr-only" aria-live=politeness aria-atomic="true">
            {message}
        </div>
    }
}
