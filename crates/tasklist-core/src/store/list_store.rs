//! List Store
//!
//! Owns the ordered items. `add`, `toggle` and `remove` are the only
//! mutation paths; each is all-or-nothing.

use tracing::{debug, warn};

use super::ids::{IdSource, SequentialIds};
use crate::domain::{Entity, Item, ItemId, NotFoundError, ValidationError};

/// Ordered, insertion-preserving collection of items
#[derive(Debug, Clone)]
pub struct ListStore<I = SequentialIds> {
    items: Vec<Item>,
    ids: I,
}

impl ListStore<SequentialIds> {
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl Default for ListStore<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> ListStore<I> {
    /// Create an empty store drawing ids from `ids`
    pub fn with_ids(ids: I) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Append a new incomplete item with the trimmed `text`
    pub fn add(&mut self, text: &str) -> Result<Item, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            warn!("Rejected empty item text");
            return Err(ValidationError::EmptyInput);
        }

        let item = Item::new(self.ids.next_id(), text.to_string());
        self.items.push(item.clone());
        debug!(id = %item.id, len = self.items.len(), "Item added");
        Ok(item)
    }

    /// Flip the completed flag of `id`
    pub fn toggle(&mut self, id: ItemId) -> Result<Item, NotFoundError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| not_found(id))?;

        item.completed = !item.completed;
        debug!(id = %id, completed = item.completed, "Item toggled");
        Ok(item.clone())
    }

    /// Remove `id`, keeping the relative order of the rest
    pub fn remove(&mut self, id: ItemId) -> Result<Item, NotFoundError> {
        let index = self
            .position(id)
            .ok_or_else(|| not_found(id))?;

        let removed = self.items.remove(index);
        debug!(id = %id, len = self.items.len(), "Item removed");
        Ok(removed)
    }

    /// Point-in-time copy of the list
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }
}

impl<I> ListStore<I> {
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

fn not_found(id: ItemId) -> NotFoundError {
    debug!(id = %id, "No item with id");
    NotFoundError { id }
}
