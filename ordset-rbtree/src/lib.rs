//! Red-black tree sorted collection
//!
//! A self-balancing binary search tree storing unique values of an ordered
//! type. Insertion splices a red leaf at its sorted position and then
//! repairs the red-black invariants bottom-up with an explicit climb loop;
//! membership queries and in-order iteration are read-only.
//!
//! # Structure
//!
//! Nodes live in an arena owned by the tree; parent/child relations are
//! opaque [`NodeId`] handles rather than owning pointers, so the upward
//! parent link never creates an ownership cycle and rotations only rewrite
//! the handful of handles they must.
//!
//! Invariants held after every completed insert:
//!
//! - binary-search-tree order, no duplicate values
//! - the root is black
//! - no red node has a red child
//! - every path from a node to a descendant leaf crosses the same number
//!   of black nodes
//! - `size` equals the number of nodes reachable from the root

mod fmt;
mod iter;
mod node;
mod tree;
mod view;

pub use iter::InOrderIter;
pub use node::{Color, NodeId};
pub use tree::RedBlackTree;
pub use view::NodeView;

use ordset_core::{Error, SortedCollection};

impl<T: Ord> SortedCollection<T> for RedBlackTree<T> {
    type Iter<'a>
        = InOrderIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, value: Option<T>) -> Result<(), Error> {
        RedBlackTree::insert(self, value)
    }

    fn contains(&self, value: Option<&T>) -> Result<bool, Error> {
        RedBlackTree::contains(self, value)
    }

    fn size(&self) -> usize {
        RedBlackTree::size(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackTree::is_empty(self)
    }

    fn iter(&self) -> InOrderIter<'_, T> {
        RedBlackTree::iter(self)
    }
}
