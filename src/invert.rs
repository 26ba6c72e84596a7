//! Deep inversion of key paths.
//!
//! For each leaf reached through the key path `[k1, k2, ..., kn]`,
//! [`deep_invert`] writes the leaf at `[kn, ..., k2, k1]` in a fresh tree:
//! the deepest key becomes the outermost one and the outermost key ends up
//! holding the value.
//!
//! # Examples
//!
//! ```rust
//! use nestree::node;
//! use nestree::invert::deep_invert;
//!
//! let hash = node!({ "a": { "b": { "c": 1 } }, "d": { "e": 2 } });
//! assert_eq!(
//!     deep_invert(&hash),
//!     node!({ "c": { "b": { "a": 1 } }, "e": { "d": 2 } })
//! );
//! ```
//!
//! # Limitations
//!
//! Empty sub-nodes hold no leaves, so they vanish from the result and a
//! second inversion cannot bring them back. Collisions are resolved by
//! traversal order: a later write to the same inverted position replaces the
//! earlier one, and a leaf sitting where a later path needs a node is
//! replaced by that node.

use crate::tree::{Key, Node, Tree};

/// Inverts the key path of every leaf in `tree`.
///
/// Paths that share an inverted prefix are merged into the same branch of
/// the result. Sequences count as leaves.
#[tracing::instrument(level = "trace", skip_all, fields(entries = tree.len()))]
pub fn deep_invert(tree: &Node) -> Node {
    let mut result = Node::new();
    let mut path = Vec::new();
    traverse(tree, &mut path, &mut result);
    result
}

fn traverse<'a>(node: &'a Node, path: &mut Vec<&'a Key>, result: &mut Node) {
    for (key, value) in node {
        path.push(key);
        match value {
            Tree::Node(child) => traverse(child, path, result),
            leaf => insert_inverted(result, path, leaf.clone()),
        }
        path.pop();
    }
}

/// Writes `value` at the reversed `path`, with the first key of `path`
/// innermost.
fn insert_inverted(result: &mut Node, path: &[&Key], value: Tree) {
    let Some((outermost, rest)) = path.split_first() else {
        return;
    };
    let mut current = result;
    for key in rest.iter().rev() {
        current = current.entry_or_insert_node(*key);
    }
    current.insert(*outermost, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node;
    use rstest::rstest;

    #[rstest]
    fn test_invert_empty() {
        assert_eq!(deep_invert(&Node::new()), Node::new());
    }

    #[rstest]
    fn test_invert_flat_node_is_identity() {
        let flat = node!({ "a": 1, "b": "x" });
        assert_eq!(deep_invert(&flat), flat);
    }

    #[rstest]
    fn test_invert_two_levels() {
        let hash = node!({ "a": { "x": 1 }, "b": { "x": 2, "y": 3 }, "c": { "x": 3 } });
        assert_eq!(
            deep_invert(&hash),
            node!({ "x": { "a": 1, "b": 2, "c": 3 }, "y": { "b": 3 } })
        );
    }

    #[rstest]
    fn test_invert_three_levels() {
        let hash = node!({
            "a": { "x": { "foo": 1 } },
            "b": { "x": { "foo": 2, "bar": 3 } },
            "c": { "x": { "foo": 3 } }
        });
        assert_eq!(
            deep_invert(&hash),
            node!({ "foo": { "x": { "a": 1, "b": 2, "c": 3 } }, "bar": { "x": { "b": 3 } } })
        );
    }

    #[rstest]
    fn test_invert_keeps_null_and_sequence_leaves() {
        let hash = node!({ "a": { "x": null, "y": [1, 2] } });
        assert_eq!(
            deep_invert(&hash),
            node!({ "x": { "a": null }, "y": { "a": [1, 2] } })
        );
    }

    #[rstest]
    fn test_invert_drops_empty_branches() {
        let hash = node!({ "a": {}, "b": { "x": 1 } });
        assert_eq!(deep_invert(&hash), node!({ "x": { "b": 1 } }));
    }

    #[rstest]
    fn test_invert_orders_result_by_first_appearance() {
        let hash = node!({ "a": { "y": 1, "x": 2 }, "b": { "z": 3 } });
        let inverted = deep_invert(&hash);
        let keys: Vec<&str> = inverted.keys().map(Key::as_str).collect();
        assert_eq!(keys, vec!["y", "x", "z"]);
    }

    #[rstest]
    fn test_invert_leaf_collision_last_write_wins() {
        let hash = node!({ "x": 5, "a": { "x": 1 } });
        assert_eq!(deep_invert(&hash), node!({ "x": { "a": 1 } }));

        let reversed = node!({ "a": { "x": 1 }, "x": 5 });
        assert_eq!(deep_invert(&reversed), node!({ "x": 5 }));
    }

    #[rstest]
    fn test_invert_does_not_touch_input() {
        let hash = node!({ "a": { "x": 1 } });
        let _ = deep_invert(&hash);
        assert_eq!(hash, node!({ "a": { "x": 1 } }));
    }
}
