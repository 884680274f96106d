//! Item id allocation

use crate::domain::ItemId;

/// Hands out ids for new items. Must never return an id twice.
pub trait IdSource {
    fn next_id(&mut self) -> ItemId;
}

/// Monotonic counter starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Resume counting from `next`
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next);
        self.next += 1;
        id
    }
}
