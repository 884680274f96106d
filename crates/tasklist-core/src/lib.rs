//! Task List Core
//!
//! Layered like the rest of the app:
//! - domain: the `Item` entity and error types
//! - store: the ordered list and its three mutations
//! - view: stateless projection from a snapshot to a render payload
//! - controller: glues a store to a render sink

pub mod controller;
pub mod domain;
pub mod store;
pub mod view;

pub use controller::{Command, ListController, RenderSink};
pub use domain::{Entity, Item, ItemId, ListError, ListResult, NotFoundError, ValidationError};
pub use store::{IdSource, ListStore, SequentialIds};
pub use view::{
    delete_prompt, initial, synchronize, ItemView, Mutation, Notification, Politeness,
    RenderPayload, ToggleAction,
};
