//! List Controller
//!
//! Owns a `ListStore` and a render sink. Every successful mutation is
//! followed by exactly one full rebuild pushed to the sink; failed
//! operations leave both the list and the sink untouched.

use tracing::{debug, info};

use crate::domain::{Item, ItemId, ListResult, NotFoundError, ValidationError};
use crate::store::{IdSource, ListStore, SequentialIds};
use crate::view::{self, Mutation, RenderPayload};

/// Receiver of rebuild instructions
pub trait RenderSink {
    fn rebuild(&mut self, payload: RenderPayload);
}

impl<F> RenderSink for F
where
    F: FnMut(RenderPayload),
{
    fn rebuild(&mut self, payload: RenderPayload) {
        self(payload)
    }
}

/// An input event from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(ItemId),
    Remove(ItemId),
}

pub struct ListController<S, I = SequentialIds> {
    store: ListStore<I>,
    sink: S,
}

impl<S: RenderSink> ListController<S, SequentialIds> {
    pub fn new(sink: S) -> Self {
        Self::with_store(ListStore::new(), sink)
    }
}

impl<S: RenderSink, I: IdSource> ListController<S, I> {
    pub fn with_store(store: ListStore<I>, sink: S) -> Self {
        Self { store, sink }
    }

    /// Push the first paint, with no announcement
    pub fn render_initial(&mut self) {
        let payload = view::initial(self.store.items());
        info!(
            items = payload.total,
            completed = self.store.completed_count(),
            "Initial render"
        );
        self.sink.rebuild(payload);
    }

    pub fn add(&mut self, text: &str) -> Result<Item, ValidationError> {
        let item = self.store.add(text)?;
        self.publish(Mutation::Added(item.clone()));
        Ok(item)
    }

    pub fn toggle(&mut self, id: ItemId) -> Result<Item, NotFoundError> {
        let item = self.store.toggle(id)?;
        self.publish(Mutation::Toggled(item.clone()));
        Ok(item)
    }

    /// Remove `id`. Confirmation, if any, has already happened.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, NotFoundError> {
        let item = self.store.remove(id)?;
        self.publish(Mutation::Removed(item.clone()));
        Ok(item)
    }

    /// Run one input event to completion
    pub fn apply(&mut self, command: Command) -> ListResult<Item> {
        debug!(?command, "Applying command");
        match command {
            Command::Add(text) => Ok(self.add(&text)?),
            Command::Toggle(id) => Ok(self.toggle(id)?),
            Command::Remove(id) => Ok(self.remove(id)?),
        }
    }

    pub fn snapshot(&self) -> Vec<Item> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &ListStore<I> {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn publish(&mut self, mutation: Mutation) {
        let payload = view::synchronize(self.store.items(), &mutation);
        self.sink.rebuild(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListError;

    #[derive(Default)]
    struct Recorder {
        payloads: Vec<RenderPayload>,
    }

    impl RenderSink for Recorder {
        fn rebuild(&mut self, payload: RenderPayload) {
            self.payloads.push(payload);
        }
    }

    #[test]
    fn test_render_initial() {
        let mut controller = ListController::new(Recorder::default());
        controller.render_initial();

        let payloads = &controller.sink().payloads;
        assert_eq!(payloads.len(), 1);
        assert!(payloads[0].is_empty);
        assert!(payloads[0].notification.is_none());
    }

    #[test]
    fn test_each_success_rebuilds_once() {
        let mut controller = ListController::new(Recorder::default());
        let item = controller.add("Buy milk").unwrap();
        controller.toggle(item.id).unwrap();
        controller.remove(item.id).unwrap();

        let payloads = &controller.sink().payloads;
        assert_eq!(payloads.len(), 3);
        assert!(payloads[0].items[0].live);
        assert!(payloads[1].items[0].completed);
        assert_eq!(
            payloads[1].notification.as_ref().unwrap().message,
            "Buy milk marked as complete."
        );
        assert!(payloads[2].is_empty);
    }

    #[test]
    fn test_failures_do_not_rebuild() {
        let mut controller = ListController::new(Recorder::default());
        controller.add("A").unwrap();

        assert_eq!(controller.add("  "), Err(ValidationError::EmptyInput));
        assert!(controller.toggle(ItemId::new(99)).is_err());
        assert!(controller.remove(ItemId::new(99)).is_err());
        assert_eq!(controller.sink().payloads.len(), 1);
        assert_eq!(controller.store().len(), 1);
    }

    #[test]
    fn test_apply_commands() {
        let mut controller = ListController::new(Recorder::default());
        let a = controller.apply(Command::Add("A".to_string())).unwrap();
        controller.apply(Command::Toggle(a.id)).unwrap();

        let err = controller.apply(Command::Remove(ItemId::new(42))).unwrap_err();
        assert_eq!(err, ListError::NotFound(NotFoundError { id: ItemId::new(42) }));

        let err = controller.apply(Command::Add(String::new())).unwrap_err();
        assert_eq!(err, ListError::Validation(ValidationError::EmptyInput));
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut controller = ListController::new(|payload: RenderPayload| seen.push(payload.total));
            controller.add("one").unwrap();
            controller.add("two").unwrap();
        }
        assert_eq!(seen, vec![1, 2]);
    }
}
