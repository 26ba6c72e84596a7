//! Building nested nodes from level lists.
//!
//! A level list `[L1, L2, ..., Lm]` describes a tree whose first level has
//! the keys of `L1`, each holding a node with the keys of `L2`, and so on;
//! the keys of `Lm` hold the leaf value.

use crate::tree::{Key, Node, Tree};

/// Builds a nested node from an ordered list of key levels.
///
/// Every key of the first level maps to an independent copy of the node
/// built from the remaining levels; the last level maps its keys to `value`.
/// An empty list yields an empty node. Repeated keys within a level
/// collapse, the last occurrence winning.
///
/// # Examples
///
/// ```rust
/// use nestree::{node, tree};
/// use nestree::nested::to_nested_h;
///
/// assert_eq!(
///     to_nested_h(&[["a", "b"], ["x", "y"]], &tree!(0)),
///     node!({ "a": { "x": 0, "y": 0 }, "b": { "x": 0, "y": 0 } })
/// );
///
/// let flat = to_nested_h(&[vec!["a", "b"]], &tree!(null));
/// assert_eq!(flat, node!({ "a": null, "b": null }));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(levels = levels.len()))]
pub fn to_nested_h<L, K>(levels: &[L], value: &Tree) -> Node
where
    L: AsRef<[K]>,
    K: Clone + Into<Key>,
{
    build(levels, value)
}

fn build<L, K>(levels: &[L], value: &Tree) -> Node
where
    L: AsRef<[K]>,
    K: Clone + Into<Key>,
{
    let Some((first, rest)) = levels.split_first() else {
        return Node::new();
    };
    let inner = if rest.is_empty() {
        value.clone()
    } else {
        Tree::Node(build(rest, value))
    };
    first
        .as_ref()
        .iter()
        .map(|key| (key.clone(), inner.clone()))
        .collect()
}
