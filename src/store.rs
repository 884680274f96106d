//! Presentation State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list itself
//! lives in the core controller; this store only holds what was last
//! rendered from it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tasklist_core::{ListController, Notification, Politeness, RenderPayload, RenderSink};

/// Everything the components draw from
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Latest full rebuild from the view synchronizer
    pub view: RenderPayload,
    /// Text currently in the screen reader live region
    pub announcement: Option<Notification>,
    /// `aria-live` of the region; keeps the last value after clearing
    pub announcement_politeness: Politeness,
    /// Bumped per announcement so stale clear timers are ignored
    pub announcement_seq: u32,
    /// Validation message under the input
    pub input_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<UiState>;

/// The controller as wired into the page
pub type AppController = ListController<StoreSink>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Arranges for `store_clear_announcement(store, seq)` after `delay_ms`
pub type ClearScheduler = fn(store: AppStore, seq: u32, delay_ms: u32);

/// Render sink that writes rebuilds into the store
pub struct StoreSink {
    store: AppStore,
    clear_after_ms: u32,
    schedule_clear: ClearScheduler,
}

impl StoreSink {
    pub fn new(store: AppStore, clear_after_ms: u32) -> Self {
        Self::with_scheduler(store, clear_after_ms, schedule_clear_timer)
    }

    pub fn with_scheduler(store: AppStore, clear_after_ms: u32, schedule_clear: ClearScheduler) -> Self {
        Self {
            store,
            clear_after_ms,
            schedule_clear,
        }
    }
}

impl RenderSink for StoreSink {
    fn rebuild(&mut self, payload: RenderPayload) {
        let notification = payload.notification.clone();
        self.store.view().set(payload);
        if let Some(notification) = notification {
            let seq = store_announce(&self.store, notification);
            (self.schedule_clear)(self.store, seq, self.clear_after_ms);
        }
    }
}

/// Browser timer backed scheduler
fn schedule_clear_timer(store: AppStore, seq: u32, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        store_clear_announcement(&store, seq);
    });
}

// ========================
// Store Helper Functions
// ========================

/// Put a message in the live region. Returns its sequence number.
pub fn store_announce(store: &AppStore, notification: Notification) -> u32 {
    let seq = {
        let field = store.announcement_seq();
        let mut seq = field.write();
        *seq = seq.wrapping_add(1);
        *seq
    };
    tracing::debug!(message = %notification.message, seq, "Announcing");
    store.announcement_politeness().set(notification.politeness);
    store.announcement().set(Some(notification));
    seq
}

/// Empty the live region if `seq` is still the latest announcement
pub fn store_clear_announcement(store: &AppStore, seq: u32) {
    if store.announcement_seq().get_untracked() == seq {
        store.announcement().set(None);
    }
}

/// Show or hide the validation message
pub fn store_set_input_error(store: &AppStore, message: Option<String>) {
    store.input_error().set(message);
}
