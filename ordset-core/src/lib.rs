//! Shared boundary for ordset collections
//!
//! This crate holds the pieces every collection in the workspace agrees on:
//! the [`SortedCollection`] trait consumed by unrelated callers, and the
//! [`Error`] taxonomy surfaced by collection operations. Implementations
//! live in their own crates (currently `ordset-rbtree`).

mod collection;
mod error;

pub use collection::SortedCollection;
pub use error::Error;
