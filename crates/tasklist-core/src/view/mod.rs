//! View Synchronizer
//!
//! Stateless projection from a list snapshot plus the last mutation to
//! everything the presentation layer needs for a full rebuild.

mod descriptor;
mod notification;
mod synchronizer;

pub use descriptor::{ItemView, ToggleAction};
pub use notification::{delete_prompt, Mutation, Notification, Politeness};
pub use synchronizer::{initial, synchronize, RenderPayload};
