//! Acceptance-test support for ordset collections
//!
//! Step definitions assert against exact tree shapes, so this crate
//! provides a small path language over the read-only cursor: `"root"`,
//! `"root.left"`, `"root.right.right"`, and so on.

use ordset_rbtree::{NodeView, RedBlackTree};

/// Walks `path` from the root of `tree`, panicking with a readable
/// message when an edge is missing.
pub fn node_at<'a, T>(tree: &'a RedBlackTree<T>, path: &str) -> NodeView<'a, T> {
    let mut view = tree.root().expect("tree has no root");
    if path == "root" {
        return view;
    }
    let steps = path
        .strip_prefix("root.")
        .unwrap_or_else(|| panic!("path {path:?} must start with \"root\""));
    for step in steps.split('.') {
        let next = match step {
            "left" => view.left(),
            "right" => view.right(),
            other => panic!("unknown path step {other:?} in {path:?}"),
        };
        view = next.unwrap_or_else(|| panic!("no node at {step:?} while walking {path:?}"));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_at_walks_paths() {
        let mut tree = RedBlackTree::new();
        for value in [2, 1, 3] {
            tree.insert(Some(value)).unwrap();
        }
        assert_eq!(*node_at(&tree, "root").value(), 2);
        assert_eq!(*node_at(&tree, "root.left").value(), 1);
        assert_eq!(*node_at(&tree, "root.right").value(), 3);
    }

    #[test]
    #[should_panic(expected = "no node at")]
    fn test_node_at_reports_missing_edges() {
        let mut tree = RedBlackTree::new();
        tree.insert(Some(1)).unwrap();
        node_at(&tree, "root.left.left");
    }
}
