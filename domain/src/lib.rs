//! Business logic for the live items service.
//!
//! This crate re-exports the item model types from the `store` crate so that
//! consumers of the `domain` crate do not need to directly depend on the
//! `store` crate. The `web` layer works exclusively against this interface
//! while the storage implementation details remain in `store`.

// Re-exports from the `store` crate
pub use store::{items, Id, ItemStore};

pub mod error;
pub mod item;
