//! In-order iteration
//!
//! A single-pass, stateful traversal: an explicit stack of ancestor
//! handles plus a current handle, descending left as far as possible and
//! resuming from the stack. Each iterator is independent; the shared
//! borrow on the tree rules out mutation while any iterator is alive.

use ordset_core::Error;

use crate::node::NodeId;
use crate::tree::RedBlackTree;

/// Single-use iterator yielding a tree's values in ascending order.
#[derive(Debug)]
pub struct InOrderIter<'a, T> {
    tree: &'a RedBlackTree<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> InOrderIter<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>) -> Self {
        InOrderIter {
            tree,
            stack: Vec::new(),
            current: tree.root_id(),
        }
    }

    /// Reports whether another value remains, without consuming one.
    pub fn has_next(&self) -> bool {
        self.current.is_some() || !self.stack.is_empty()
    }

    /// Advances to the next value in ascending order.
    ///
    /// Fails with [`Error::EndOfSequence`] once the traversal is
    /// exhausted; calling it again keeps returning the same error.
    pub fn try_next(&mut self) -> Result<&'a T, Error> {
        // push the whole left spine of the current subtree
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.node(id).left;
        }
        let Some(id) = self.stack.pop() else {
            return Err(Error::EndOfSequence);
        };
        self.current = self.tree.node(id).right;
        Ok(&self.tree.node(id).value)
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.try_next().ok()
    }
}
