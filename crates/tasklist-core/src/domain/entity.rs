//! Domain Layer - Core Entity Trait and Errors

use serde::Serialize;
use thiserror::Error;

use super::item::ItemId;

/// Core trait for addressable list entries
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Rejected input for `add`
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// Text was empty after trimming
    #[error("empty input")]
    EmptyInput,
}

/// `toggle` or `remove` addressed an id that is not in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("item {id} not found")]
pub struct NotFoundError {
    pub id: ItemId,
}

/// Any failure a list operation can report
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ListError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Common result type for controller operations
pub type ListResult<T> = Result<T, ListError>;
