//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;
use tasklist_core::{Command, Item, ListResult};

use crate::store::AppController;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The only writer of the task list
    controller: StoredValue<AppController>,
    /// New task input, refocused after add and delete
    pub input_ref: NodeRef<html::Input>,
    /// Ask before deleting
    pub confirm_before_delete: bool,
}

impl AppContext {
    pub fn new(
        controller: AppController,
        input_ref: NodeRef<html::Input>,
        confirm_before_delete: bool,
    ) -> Self {
        Self {
            controller: StoredValue::new(controller),
            input_ref,
            confirm_before_delete,
        }
    }

    /// Run one input event through the controller.
    /// `None` if the app has been torn down.
    pub fn dispatch(&self, command: Command) -> Option<ListResult<Item>> {
        self.controller.try_update_value(|controller| controller.apply(command))
    }

    pub fn focus_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            let _ = input.focus();
        }
    }
}
