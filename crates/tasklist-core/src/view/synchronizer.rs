//! Snapshot + mutation -> render payload

use serde::Serialize;

use super::descriptor::ItemView;
use super::notification::{Mutation, Notification};
use crate::domain::{Item, ItemId};

/// Full rebuild instructions for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RenderPayload {
    /// One descriptor per item, in list order
    pub items: Vec<ItemView>,
    /// Show the "no tasks" placeholder
    pub is_empty: bool,
    pub total: usize,
    pub completed: usize,
    pub notification: Option<Notification>,
}

/// Project `snapshot` after `mutation` was applied
pub fn synchronize(snapshot: &[Item], mutation: &Mutation) -> RenderPayload {
    let live_id = match mutation {
        Mutation::Added(item) => Some(item.id),
        _ => None,
    };
    build(snapshot, live_id, mutation.notification())
}

/// Project `snapshot` with no preceding mutation (first paint)
pub fn initial(snapshot: &[Item]) -> RenderPayload {
    build(snapshot, None, None)
}

fn build(
    snapshot: &[Item],
    live_id: Option<ItemId>,
    notification: Option<Notification>,
) -> RenderPayload {
    let items: Vec<ItemView> = snapshot
        .iter()
        .map(|item| ItemView::from_item(item, Some(item.id) == live_id))
        .collect();

    RenderPayload {
        is_empty: items.is_empty(),
        total: items.len(),
        completed: snapshot.iter().filter(|item| item.completed).count(),
        items,
        notification,
    }
}
