//! Textual renderings for structural debugging
//!
//! Both renderings use the `[ v1, v2, ..., vn ]` form. The level-order
//! walk exists to make rotation results visible in tests and debugging
//! sessions; the in-order form doubles as a readable dump of the sorted
//! contents.

use std::collections::VecDeque;
use std::fmt::{self, Display, Write};

use crate::tree::RedBlackTree;

impl<T: Display> RedBlackTree<T> {
    /// Values in sorted order, e.g. `"[ 1, 2, 3 ]"` (`"[ ]"` when empty).
    pub fn to_in_order_string(&self) -> String {
        let mut out = String::from("[ ");
        let mut first = true;
        for value in self.iter() {
            if !first {
                out.push_str(", ");
            }
            let _ = write!(out, "{value}");
            first = false;
        }
        if first {
            out.pop();
        }
        out.push_str(" ]");
        out
    }

    /// Values level by level from the root, breadth-first.
    pub fn to_level_order_string(&self) -> String {
        let mut out = String::from("[ ");
        let mut queue: VecDeque<_> = self.root_id().into_iter().collect();
        let mut first = true;
        while let Some(id) = queue.pop_front() {
            let node = self.node(id);
            if let Some(left) = node.left {
                queue.push_back(left);
            }
            if let Some(right) = node.right {
                queue.push_back(right);
            }
            if !first {
                out.push_str(", ");
            }
            let _ = write!(out, "{}", node.value);
            first = false;
        }
        if first {
            out.pop();
        }
        out.push_str(" ]");
        out
    }
}

/// Combined rendering exposing both traversals for diagnostic comparison.
impl<T: Display> Display for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level order: {}\nin order: {}",
            self.to_level_order_string(),
            self.to_in_order_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> RedBlackTree<i32> {
        let mut tree = RedBlackTree::new();
        for &value in values {
            tree.insert(Some(value)).unwrap();
        }
        tree
    }

    #[test]
    fn test_empty_renderings() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.to_in_order_string(), "[ ]");
        assert_eq!(tree.to_level_order_string(), "[ ]");
    }

    #[test]
    fn test_in_order_rendering_is_sorted() {
        let tree = build(&[7, 3, 11, 5]);
        assert_eq!(tree.to_in_order_string(), "[ 3, 5, 7, 11 ]");
    }

    #[test]
    fn test_level_order_rendering_shows_shape() {
        // 2, 1, 3, 4 ends with 4 as the only depth-2 node
        let tree = build(&[2, 1, 3, 4]);
        assert_eq!(tree.to_level_order_string(), "[ 2, 1, 3, 4 ]");
    }

    #[test]
    fn test_display_combines_both_traversals() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(
            tree.to_string(),
            "level order: [ 2, 1, 3 ]\nin order: [ 1, 2, 3 ]"
        );
    }
}
