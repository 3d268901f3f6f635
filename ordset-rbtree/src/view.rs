//! Read-only structural cursor
//!
//! Shape and color assertions (and the occasional debugging session) need
//! to walk parent/child edges without being able to touch them. A
//! [`NodeView`] pairs a borrowed tree with a node handle and only ever
//! hands out more views.

use crate::node::{Color, NodeId};
use crate::tree::RedBlackTree;

/// Read-only cursor at one node of a [`RedBlackTree`].
#[derive(Debug)]
pub struct NodeView<'a, T> {
    tree: &'a RedBlackTree<T>,
    id: NodeId,
}

impl<'a, T> NodeView<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>, id: NodeId) -> Self {
        NodeView { tree, id }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &'a T {
        &self.tree.node(self.id).value
    }

    /// This node's color tag.
    pub fn color(&self) -> Color {
        self.tree.node(self.id).color
    }

    /// Cursor at the left child, if any.
    pub fn left(&self) -> Option<NodeView<'a, T>> {
        self.tree.node(self.id).left.map(|id| NodeView::new(self.tree, id))
    }

    /// Cursor at the right child, if any.
    pub fn right(&self) -> Option<NodeView<'a, T>> {
        self.tree.node(self.id).right.map(|id| NodeView::new(self.tree, id))
    }

    /// Cursor at the parent; `None` exactly when this is the root.
    pub fn parent(&self) -> Option<NodeView<'a, T>> {
        self.tree.node(self.id).parent.map(|id| NodeView::new(self.tree, id))
    }
}

impl<T> Clone for NodeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeView<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_walks_edges_both_ways() {
        let mut tree = RedBlackTree::new();
        for value in [2, 1, 3] {
            tree.insert(Some(value)).unwrap();
        }
        let root = tree.root().unwrap();
        assert!(root.parent().is_none());

        let left = root.left().unwrap();
        assert_eq!(*left.value(), 1);
        assert_eq!(*left.parent().unwrap().value(), 2);
        assert_eq!(*root.right().unwrap().value(), 3);
        assert!(left.left().is_none() && left.right().is_none());
    }
}
