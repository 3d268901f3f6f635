//! The in-process collection boundary
//!
//! Callers that do not care which concrete structure backs a collection
//! (hash table, balanced tree, ...) program against this trait. Values are
//! handed over as `Option<T>`: `None` stands for an absent value at the
//! boundary and is rejected with [`Error::InvalidInput`], never stored.

use crate::Error;

/// An ordered collection of unique values.
pub trait SortedCollection<T: Ord> {
    /// Borrowing iterator over the values in ascending order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts `value` at its sorted position.
    ///
    /// Fails with [`Error::InvalidInput`] when `value` is absent and with
    /// [`Error::DuplicateValue`] when the collection already holds it; in
    /// both cases the collection is unchanged.
    fn insert(&mut self, value: Option<T>) -> Result<(), Error>;

    /// Reports whether the collection holds `value`.
    ///
    /// Fails with [`Error::InvalidInput`] when `value` is absent.
    fn contains(&self, value: Option<&T>) -> Result<bool, Error>;

    /// Number of values currently stored.
    fn size(&self) -> usize;

    /// True when no values are stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Single-use, forward-only iterator over the values in sorted order.
    ///
    /// The borrow on `self` keeps the collection immutable for the
    /// iterator's whole lifetime.
    fn iter(&self) -> Self::Iter<'_>;
}
