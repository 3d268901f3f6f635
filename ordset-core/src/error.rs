//! Error taxonomy for collection operations
//!
//! Input-validation errors (`InvalidInput`, `DuplicateValue`) are surfaced
//! directly to the caller and never leave a collection partially mutated.
//! `InvalidRotation` is internal-consistency only: it indicates a defect in
//! the repair engine's case dispatch and is propagated rather than swallowed.

use thiserror::Error;

/// Errors raised by sorted-collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation was handed an absent value where a concrete,
    /// comparable value is required.
    #[error("a concrete value is required; absent values cannot be stored or queried")]
    InvalidInput,

    /// An insert was attempted with a value the collection already holds.
    /// The collection is left unchanged.
    #[error("value is already present in the collection")]
    DuplicateValue,

    /// A rotation was requested between two nodes that are not in direct
    /// parent/child adjacency. Seeing this outside the tree internals means
    /// the repair engine dispatched a case incorrectly.
    #[error("rotation requested between nodes that are not parent and child")]
    InvalidRotation,

    /// A traversal was advanced past its final value.
    #[error("no values remain in this traversal")]
    EndOfSequence,
}
