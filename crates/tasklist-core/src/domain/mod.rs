//! Domain Layer
//!
//! The list has a single entity, `Item`. This layer has no dependencies
//! beyond serde and thiserror.

mod entity;
mod item;

pub use entity::{Entity, ListError, ListResult, NotFoundError, ValidationError};
pub use item::{Item, ItemId};
