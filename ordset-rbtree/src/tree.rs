//! Tree structure, insertion engine, and rotation primitive

use core::cmp::Ordering;

use ordset_core::Error;
use tracing::trace;

use crate::iter::InOrderIter;
use crate::node::{Color, Node, NodeId};
use crate::view::NodeView;

/// A red-black tree over values of an ordered type.
///
/// See the crate docs for the invariants this structure maintains.
#[derive(Debug)]
pub struct RedBlackTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
    size: usize,
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RedBlackTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        RedBlackTree {
            nodes: Vec::new(),
            root: None,
            size: 0,
        }
    }

    /// Number of values currently stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True when the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read-only cursor positioned at the root, `None` when empty.
    pub fn root(&self) -> Option<NodeView<'_, T>> {
        self.root.map(|id| NodeView::new(self, id))
    }

    /// Single-use in-order iterator over the stored values.
    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self)
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Repairs the red-black invariants after `node` was spliced in red.
    ///
    /// Explicit climb rather than recursion: only the red-uncle case
    /// re-enters the loop, one grandparent closer to the root each time.
    /// The caller blackens the root afterwards, which also covers the
    /// red-root exit below.
    fn repair_after_insert(&mut self, mut node: NodeId) -> Result<(), Error> {
        loop {
            let Some(parent) = self.node(node).parent else {
                break;
            };
            if self.node(parent).color.is_black() {
                break;
            }
            let Some(grand) = self.node(parent).parent else {
                // red root; insert() forces it black
                break;
            };
            let parent_is_left = self.node(grand).left == Some(parent);
            let uncle = if parent_is_left {
                self.node(grand).right
            } else {
                self.node(grand).left
            };

            // A missing uncle counts as black, so only an existing red
            // uncle selects the recolor-and-climb case.
            if let Some(uncle) = uncle.filter(|&u| self.node(u).color.is_red()) {
                trace!(?node, ?grand, "repair: red uncle, recoloring and climbing");
                self.node_mut(parent).color = Color::Black;
                self.node_mut(uncle).color = Color::Black;
                self.node_mut(grand).color = Color::Red;
                node = grand;
                continue;
            }

            let node_is_left = self.node(parent).left == Some(node);
            if node_is_left == parent_is_left {
                // line: one rotation of the parent around the grandparent
                trace!(?node, ?parent, ?grand, "repair: line shape, single rotation");
                self.rotate(parent, grand)?;
                self.node_mut(parent).color = Color::Black;
            } else {
                // triangle: two rotations land the node where the
                // grandparent was
                trace!(?node, ?parent, ?grand, "repair: triangle shape, double rotation");
                self.rotate(node, parent)?;
                self.rotate(node, grand)?;
                self.node_mut(node).color = Color::Black;
            }
            // Recolor the demoted grandparent by identity, never by which
            // side it landed on.
            self.node_mut(grand).color = Color::Red;
            break;
        }
        Ok(())
    }

    /// Rotates the `child`/`parent` edge into its mirror.
    ///
    /// A right child rotates left, a left child rotates right. `child`
    /// inherits `parent`'s former parent link (or the root slot), the
    /// transferred subtree is re-parented, and in-order sequence and node
    /// count are untouched. Colors are the caller's problem.
    pub(crate) fn rotate(&mut self, child: NodeId, parent: NodeId) -> Result<(), Error> {
        if self.node(parent).right == Some(child) {
            self.rotate_left(child, parent);
            Ok(())
        } else if self.node(parent).left == Some(child) {
            self.rotate_right(child, parent);
            Ok(())
        } else {
            Err(Error::InvalidRotation)
        }
    }

    fn rotate_left(&mut self, child: NodeId, parent: NodeId) {
        trace!(?child, ?parent, "rotating left");
        let transferred = self.node(child).left;
        self.node_mut(parent).right = transferred;
        if let Some(transferred) = transferred {
            self.node_mut(transferred).parent = Some(parent);
        }
        self.replace_in_ancestor(parent, child);
        self.node_mut(child).left = Some(parent);
        self.node_mut(parent).parent = Some(child);
    }

    fn rotate_right(&mut self, child: NodeId, parent: NodeId) {
        trace!(?child, ?parent, "rotating right");
        let transferred = self.node(child).right;
        self.node_mut(parent).left = transferred;
        if let Some(transferred) = transferred {
            self.node_mut(transferred).parent = Some(parent);
        }
        self.replace_in_ancestor(parent, child);
        self.node_mut(child).right = Some(parent);
        self.node_mut(parent).parent = Some(child);
    }

    /// Hands `parent`'s former upward link to `child`, updating the
    /// ancestor's matching child handle or the root slot.
    fn replace_in_ancestor(&mut self, parent: NodeId, child: NodeId) {
        let ancestor = self.node(parent).parent;
        self.node_mut(child).parent = ancestor;
        match ancestor {
            None => self.root = Some(child),
            Some(a) if self.node(a).left == Some(parent) => {
                self.node_mut(a).left = Some(child);
            }
            Some(a) => self.node_mut(a).right = Some(child),
        }
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Inserts `value` at its sorted position and restores the red-black
    /// invariants.
    ///
    /// `None` is rejected with [`Error::InvalidInput`] and a value already
    /// present with [`Error::DuplicateValue`]; either way the tree is left
    /// unchanged. The duplicate check happens during the descent, before
    /// any node is allocated.
    pub fn insert(&mut self, value: Option<T>) -> Result<(), Error> {
        let value = value.ok_or(Error::InvalidInput)?;

        let Some(mut current) = self.root else {
            let id = self.alloc(Node::new(value, None));
            self.node_mut(id).color = Color::Black;
            self.root = Some(id);
            self.size += 1;
            return Ok(());
        };

        // Locate the leaf position; equal comparison means already present.
        let (parent, goes_left) = loop {
            match value.cmp(&self.node(current).value) {
                Ordering::Equal => return Err(Error::DuplicateValue),
                Ordering::Less => match self.node(current).left {
                    Some(left) => current = left,
                    None => break (current, true),
                },
                Ordering::Greater => match self.node(current).right {
                    Some(right) => current = right,
                    None => break (current, false),
                },
            }
        };

        let id = self.alloc(Node::new(value, Some(parent)));
        if goes_left {
            self.node_mut(parent).left = Some(id);
        } else {
            self.node_mut(parent).right = Some(id);
        }
        self.size += 1;
        trace!(node = ?id, size = self.size, "spliced new red leaf");

        self.repair_after_insert(id)?;
        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
        Ok(())
    }

    /// Reports whether the tree holds `value`.
    ///
    /// `None` is rejected with [`Error::InvalidInput`].
    pub fn contains(&self, value: Option<&T>) -> Result<bool, Error> {
        let value = value.ok_or(Error::InvalidInput)?;
        let mut current = self.root;
        while let Some(id) = current {
            match value.cmp(&self.node(id).value) {
                Ordering::Equal => return Ok(true),
                Ordering::Less => current = self.node(id).left,
                Ordering::Greater => current = self.node(id).right,
            }
        }
        Ok(false)
    }
}

#[cfg(feature = "test-utils")]
impl<T: Ord> RedBlackTree<T> {
    /// Test hook: recolors the node holding `value`, returning whether it
    /// was found. Deliberately breaks the color invariants so acceptance
    /// tests can stage specific repair cases.
    pub fn force_color(&mut self, value: &T, color: Color) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            match value.cmp(&self.node(id).value) {
                Ordering::Equal => {
                    self.node_mut(id).color = color;
                    return true;
                }
                Ordering::Less => current = self.node(id).left,
                Ordering::Greater => current = self.node(id).right,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn build(values: &[i32]) -> RedBlackTree<i32> {
        let mut tree = RedBlackTree::new();
        for &value in values {
            tree.insert(Some(value)).unwrap();
        }
        tree
    }

    fn in_order(tree: &RedBlackTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn test_insert_absent_value_is_rejected() {
        let mut tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.insert(None), Err(Error::InvalidInput));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_duplicate_insert_leaves_tree_unchanged() {
        let mut tree = build(&[5, 3, 8]);
        assert_eq!(tree.insert(Some(3)), Err(Error::DuplicateValue));
        assert_eq!(tree.size(), 3);
        assert_eq!(in_order(&tree), vec![3, 5, 8]);
    }

    #[test]
    fn test_contains() {
        let tree = build(&[5, 3, 8]);
        assert_eq!(tree.contains(Some(&5)), Ok(true));
        assert_eq!(tree.contains(Some(&4)), Ok(false));
        assert_eq!(tree.contains(None), Err(Error::InvalidInput));
        // failed query never alters the tree
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn test_sole_root_is_black() {
        let tree = build(&[7]);
        let root = tree.root().unwrap();
        assert_eq!(*root.value(), 7);
        assert_eq!(root.color(), Color::Black);
    }

    /// Red-uncle recoloring: 2, 1, 3 then 4 recolors the whole top level.
    #[test]
    fn test_red_uncle_recoloring() {
        let tree = build(&[2, 1, 3, 4]);
        let root = tree.root().unwrap();
        assert_eq!(*root.value(), 2);
        assert_eq!(root.color(), Color::Black);
        assert_eq!(root.left().unwrap().color(), Color::Black);
        assert_eq!(root.right().unwrap().color(), Color::Black);
        let great = root.right().unwrap().right().unwrap();
        assert_eq!(*great.value(), 4);
        assert_eq!(great.color(), Color::Red);
    }

    /// Ascending inserts cascade through every repair case.
    #[test]
    fn test_ascending_inserts_rebalance() {
        let tree = build(&(1..=9).collect::<Vec<_>>());
        assert_eq!(in_order(&tree), (1..=9).collect::<Vec<_>>());

        let root = tree.root().unwrap();
        assert_eq!(*root.value(), 4);
        assert_eq!(root.color(), Color::Black);

        let left = root.left().unwrap();
        let right = root.right().unwrap();
        assert_eq!((*left.value(), left.color()), (2, Color::Red));
        assert_eq!((*right.value(), right.color()), (6, Color::Red));

        for (view, value) in [
            (left.left(), 1),
            (left.right(), 3),
            (right.left(), 5),
            (right.right(), 8),
        ] {
            let view = view.unwrap();
            assert_eq!((*view.value(), view.color()), (value, Color::Black));
        }

        let eight = right.right().unwrap();
        assert_eq!(*eight.left().unwrap().value(), 7);
        assert_eq!(eight.left().unwrap().color(), Color::Red);
        assert_eq!(*eight.right().unwrap().value(), 9);
        assert_eq!(eight.right().unwrap().color(), Color::Red);
    }

    #[test]
    fn test_rotate_rejects_non_adjacent_nodes() {
        let mut tree = build(&[2, 1, 3]);
        let root = tree.root_id().unwrap();
        let left = tree.node(root).left.unwrap();
        let right = tree.node(root).right.unwrap();
        assert_eq!(tree.rotate(left, right), Err(Error::InvalidRotation));
        // parent/child handed over in the wrong order is just as invalid
        assert_eq!(tree.rotate(root, left), Err(Error::InvalidRotation));
    }

    #[test]
    fn test_rotation_preserves_in_order_sequence() {
        let mut tree = build(&(1..=7).collect::<Vec<_>>());
        let before = in_order(&tree);
        let size = tree.size();

        let root = tree.root_id().unwrap();
        let left = tree.node(root).left.unwrap();
        tree.rotate(left, root).unwrap();

        assert_eq!(in_order(&tree), before);
        assert_eq!(tree.size(), size);
        // the promoted child now owns the upward link the root held
        assert!(tree.node(left).parent.is_none());
        assert_eq!(tree.root_id(), Some(left));
        assert_eq!(tree.node(root).parent, Some(left));
    }

    proptest! {
        /// Any adjacent rotation is shape-preserving.
        #[test]
        fn rotation_keeps_in_order_sequence(values in vec(-1000i32..1000, 1..60)) {
            let mut tree = RedBlackTree::new();
            for value in values {
                match tree.insert(Some(value)) {
                    Ok(()) | Err(Error::DuplicateValue) => {}
                    Err(e) => panic!("insert failed: {e}"),
                }
            }
            let before = in_order(&tree);

            let root = tree.root_id().unwrap();
            for child in [tree.node(root).left, tree.node(root).right] {
                if let Some(child) = child {
                    tree.rotate(child, root).unwrap();
                    prop_assert_eq!(&in_order(&tree), &before);
                    // undo so the second branch starts from the same shape
                    tree.rotate(root, child).unwrap();
                    prop_assert_eq!(&in_order(&tree), &before);
                }
            }
        }
    }
}
