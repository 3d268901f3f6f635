//! Node store primitives
//!
//! Nodes are kept in a `Vec` arena owned by the tree; all structural
//! relations are [`NodeId`] handles into that arena. The handle is backed
//! by `NonZeroUsize` so `Option<NodeId>` stays pointer-sized.

use core::num::NonZeroUsize;

use static_assertions::assert_eq_size;

/// Color tag carried by every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    pub fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

/// Opaque handle to a node in a tree's arena.
///
/// Handles carry no ownership; they are only meaningful to the tree that
/// issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    pub(crate) fn index(self) -> usize {
        self.0.get() - 1
    }
}

assert_eq_size!(Color, u8);
assert_eq_size!(Option<NodeId>, usize);

/// A single tree node: the stored value, its color, and three structural
/// relations. `parent` is a non-owning back handle, `None` for the root.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// New nodes are born red; the repair engine and the root rule decide
    /// everything after that.
    pub(crate) fn new(value: T, parent: Option<NodeId>) -> Self {
        Node {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}
