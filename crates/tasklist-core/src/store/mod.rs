//! Store Layer
//!
//! The authoritative ordered list and its id source.

mod ids;
mod list_store;

#[cfg(test)]
mod tests;

pub use ids::{IdSource, SequentialIds};
pub use list_store::ListStore;
