//! Per-item view descriptors

use serde::Serialize;

use super::notification::delete_prompt;
use crate::domain::{Item, ItemId};

/// What the toggle button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    MarkComplete,
    MarkIncomplete,
}

impl ToggleAction {
    /// Action for an item in the given state
    pub fn for_completed(completed: bool) -> Self {
        if completed {
            ToggleAction::MarkIncomplete
        } else {
            ToggleAction::MarkComplete
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToggleAction::MarkComplete => "mark complete",
            ToggleAction::MarkIncomplete => "mark incomplete",
        }
    }

    /// Visible button caption
    pub fn button_text(&self) -> &'static str {
        match self {
            ToggleAction::MarkComplete => "Complete",
            ToggleAction::MarkIncomplete => "Undo",
        }
    }
}

/// Everything needed to draw one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    pub action: ToggleAction,
    /// Accessible name of the text span
    pub text_label: String,
    /// Accessible name of the toggle button
    pub toggle_label: String,
    /// Accessible name of the delete button
    pub delete_label: String,
    /// Question shown before deleting
    pub delete_prompt: String,
    /// Row was created by the mutation being rendered and should be
    /// exposed as a polite status region
    pub live: bool,
}

impl ItemView {
    pub fn from_item(item: &Item, live: bool) -> Self {
        let action = ToggleAction::for_completed(item.completed);
        let text_label = if item.completed {
            format!("Completed task: {}", item.text)
        } else {
            format!("Task: {}", item.text)
        };
        let toggle_label = match action {
            ToggleAction::MarkComplete => format!("Mark {} as complete", item.text),
            ToggleAction::MarkIncomplete => format!("Mark {} as incomplete", item.text),
        };

        Self {
            id: item.id,
            text: item.text.clone(),
            completed: item.completed,
            action,
            text_label,
            toggle_label,
            delete_label: format!("Delete task: {}", item.text),
            delete_prompt: delete_prompt(item),
            live,
        }
    }
}
