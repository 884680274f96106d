//! Item Entity
//!
//! A single task in the list.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Opaque identifier, unique among live items and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Trimmed, non-empty text; fixed at creation
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create an incomplete item. Callers validate `text` first.
    pub(crate) fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(ItemId::new(1), "Test item".to_string());
        assert_eq!(item.id(), ItemId::new(1));
        assert_eq!(item.text, "Test item");
        assert!(!item.completed);
    }

    #[test]
    fn test_item_serialization() {
        let item = Item::new(ItemId::new(3), "Buy milk".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["text"], "Buy milk");
        assert_eq!(json["completed"], false);
    }
}
