//! Mutation descriptions and assistive announcements

use serde::Serialize;

use crate::domain::Item;

/// The mutation that produced the snapshot being rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum Mutation {
    Added(Item),
    Toggled(Item),
    Removed(Item),
}

impl Mutation {
    /// Announcement for this mutation. Additions have none; the new row
    /// announces itself.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Mutation::Added(_) => None,
            Mutation::Toggled(item) => {
                let state = if item.completed { "complete" } else { "incomplete" };
                Some(Notification {
                    message: format!("{} marked as {}.", item.text, state),
                    politeness: Politeness::Polite,
                })
            }
            Mutation::Removed(item) => Some(Notification {
                message: format!("{} deleted.", item.text),
                politeness: Politeness::Assertive,
            }),
        }
    }
}

/// Urgency of an announcement, mirrors `aria-live`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// Text for the announcement channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub politeness: Politeness,
}

/// Question shown before an item is deleted
pub fn delete_prompt(item: &Item) -> String {
    format!("Are you sure you want to delete \"{}\"?", item.text)
}
