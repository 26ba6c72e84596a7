//! Recursive merge of two nodes.
//!
//! [`deep_merge`] walks the right-hand node and folds each entry into a copy
//! of the left-hand node: where both sides hold a node the two are merged
//! recursively, any other pairing takes the right-hand value.
//! [`deep_merge_with`] lets the caller decide those non-node conflicts.
//!
//! Keys keep the position they have in the left node; keys only present on
//! the right are appended in their own order.

use crate::tree::{Key, Node, Tree};

/// Merges `right` into a copy of `left`, recursing where both sides hold a
/// node and otherwise letting `right` win.
///
/// # Examples
///
/// ```rust
/// use nestree::node;
/// use nestree::merge::deep_merge;
///
/// let left = node!({ "a": { "x": 1, "y": 2 }, "b": 1 });
/// let right = node!({ "a": { "y": 3, "z": 4 }, "b": { "c": 5 } });
///
/// assert_eq!(
///     deep_merge(&left, &right),
///     node!({ "a": { "x": 1, "y": 3, "z": 4 }, "b": { "c": 5 } })
/// );
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(left = left.len(), right = right.len()))]
pub fn deep_merge(left: &Node, right: &Node) -> Node {
    let mut result = left.clone();
    merge_into(&mut result, right);
    result
}

/// Merges `right` into a copy of `left` with a custom conflict resolver.
///
/// Node-valued keys present on both sides merge recursively. For every other
/// key present on both sides the resolver receives
/// `(key, left_value, right_value)` and returns the value to keep.
///
/// # Examples
///
/// ```rust
/// use nestree::node;
/// use nestree::merge::deep_merge_with;
/// use nestree::tree::Tree;
///
/// let left = node!({ "a": { "x": 1 }, "b": 10 });
/// let right = node!({ "a": { "x": 5 }, "b": 20 });
///
/// let summed = deep_merge_with(&left, &right, |_, left, right| {
///     match (left.as_f64(), right.as_f64()) {
///         (Some(left), Some(right)) => Tree::from(left + right),
///         _ => right.clone(),
///     }
/// });
/// assert_eq!(summed, node!({ "a": { "x": 6.0 }, "b": 30.0 }));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(left = left.len(), right = right.len()))]
pub fn deep_merge_with<F>(left: &Node, right: &Node, mut resolver: F) -> Node
where
    F: FnMut(&Key, &Tree, &Tree) -> Tree,
{
    let mut result = left.clone();
    merge_into_with(&mut result, right, &mut resolver);
    result
}

/// Merges `right` into `target` in place, letting `right` win conflicts.
pub(crate) fn merge_into(target: &mut Node, right: &Node) {
    merge_into_with(target, right, &mut |_: &Key, _: &Tree, right: &Tree| right.clone());
}

fn merge_into_with<F>(target: &mut Node, right: &Node, resolver: &mut F)
where
    F: FnMut(&Key, &Tree, &Tree) -> Tree,
{
    for (key, right_value) in right {
        match (target.get_mut(key.as_str()), right_value) {
            (Some(Tree::Node(left_node)), Tree::Node(right_node)) => {
                merge_into_with(left_node, right_node, resolver);
            }
            (Some(left_value), _) => {
                *left_value = resolver(key, left_value, right_value);
            }
            (None, _) => {
                target.insert(key.clone(), right_value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{node, tree};
    use rstest::rstest;

    #[rstest]
    fn test_merge_empty_nodes() {
        assert_eq!(deep_merge(&Node::new(), &Node::new()), Node::new());
    }

    #[rstest]
    fn test_merge_with_empty_right_is_identity() {
        let left = node!({ "a": { "b": 1 } });
        assert_eq!(deep_merge(&left, &Node::new()), left);
    }

    #[rstest]
    fn test_merge_with_empty_left_copies_right() {
        let right = node!({ "a": { "b": 1 } });
        assert_eq!(deep_merge(&Node::new(), &right), right);
    }

    #[rstest]
    fn test_merge_right_scalar_wins() {
        let left = node!({ "a": 1, "b": 2 });
        let right = node!({ "b": 3 });
        assert_eq!(deep_merge(&left, &right), node!({ "a": 1, "b": 3 }));
    }

    #[rstest]
    fn test_merge_right_null_wins() {
        let left = node!({ "a": 1 });
        let right = node!({ "a": null });
        assert_eq!(deep_merge(&left, &right), node!({ "a": null }));
    }

    #[rstest]
    fn test_merge_node_replaced_by_scalar() {
        let left = node!({ "a": { "x": 1 } });
        let right = node!({ "a": 0 });
        assert_eq!(deep_merge(&left, &right), node!({ "a": 0 }));
    }

    #[rstest]
    fn test_merge_scalar_replaced_by_node() {
        let left = node!({ "a": 0 });
        let right = node!({ "a": { "x": 1 } });
        assert_eq!(deep_merge(&left, &right), node!({ "a": { "x": 1 } }));
    }

    #[rstest]
    fn test_merge_sequences_are_replaced_not_concatenated() {
        let left = node!({ "a": [1, 2] });
        let right = node!({ "a": [3] });
        assert_eq!(deep_merge(&left, &right), node!({ "a": [3] }));
    }

    #[rstest]
    fn test_merge_recurses_several_levels() {
        let left = node!({ "a": { "b": { "c": 1, "d": 2 } } });
        let right = node!({ "a": { "b": { "d": 3, "e": 4 }, "f": 5 } });
        assert_eq!(
            deep_merge(&left, &right),
            node!({ "a": { "b": { "c": 1, "d": 3, "e": 4 }, "f": 5 } })
        );
    }

    #[rstest]
    fn test_merge_keeps_left_order_then_appends_right() {
        let left = node!({ "b": 1, "a": 2 });
        let right = node!({ "c": 3, "a": 4 });
        let merged = deep_merge(&left, &right);
        let keys: Vec<&str> = merged.keys().map(Key::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[rstest]
    fn test_merge_does_not_touch_inputs() {
        let left = node!({ "a": { "x": 1 } });
        let right = node!({ "a": { "y": 2 } });
        let _ = deep_merge(&left, &right);
        assert_eq!(left, node!({ "a": { "x": 1 } }));
        assert_eq!(right, node!({ "a": { "y": 2 } }));
    }

    #[rstest]
    fn test_merge_with_resolver_sees_key_and_both_values() {
        let left = node!({ "a": { "x": 1 }, "b": "left" });
        let right = node!({ "a": { "x": 2 }, "b": "right" });
        let mut seen = Vec::new();
        let merged = deep_merge_with(&left, &right, |key, left, right| {
            seen.push(key.to_string());
            tree!([(left.clone()), (right.clone())])
        });
        assert_eq!(seen, vec!["x", "b"]);
        assert_eq!(
            merged,
            node!({ "a": { "x": [1, 2] }, "b": ["left", "right"] })
        );
    }

    #[rstest]
    fn test_merge_with_resolver_not_called_for_new_keys() {
        let left = node!({ "a": 1 });
        let right = node!({ "b": 2 });
        let merged = deep_merge_with(&left, &right, |_, _, _| unreachable!());
        assert_eq!(merged, node!({ "a": 1, "b": 2 }));
    }
}
