//! Deep sorting of node keys.
//!
//! Entries are reordered at every nesting level. The sort key is computed
//! from `(key, value)`, where node values are hidden behind `None` so that a
//! comparator can single out sub-trees without looking inside them. Only
//! node-valued entries recurse; sequences and leaves are carried over as
//! they are.

use crate::tree::{Key, Node, Tree};

/// Sorts the keys of `tree` lexicographically at every level.
///
/// # Examples
///
/// ```rust
/// use nestree::node;
/// use nestree::sort::deep_sort;
/// use nestree::tree::Key;
///
/// let sorted = deep_sort(&node!({ "b": { "d": 2, "c": 1 }, "a": { "e": 3, "f": 4 } }));
///
/// let keys: Vec<&str> = sorted.keys().map(Key::as_str).collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// assert_eq!(sorted, node!({ "a": { "e": 3, "f": 4 }, "b": { "c": 1, "d": 2 } }));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(entries = tree.len()))]
pub fn deep_sort(tree: &Node) -> Node {
    sort_node(tree, &mut |key: &Key, _: Option<&Tree>| key.clone())
}

/// Sorts the keys of `tree` at every level by a computed sort key.
///
/// `sort_key` receives each entry's key and its value, or `None` when the
/// value is a node. Entries with equal sort keys keep their relative order.
///
/// # Examples
///
/// Sort by key length:
///
/// ```rust
/// use nestree::node;
/// use nestree::sort::deep_sort_by;
/// use nestree::tree::Key;
///
/// let sorted = deep_sort_by(&node!({ "apple": 1, "pear": 2 }), |key, _| key.as_str().len());
/// let keys: Vec<&str> = sorted.keys().map(Key::as_str).collect();
/// assert_eq!(keys, vec!["pear", "apple"]);
/// ```
///
/// Place a `"null"` key last:
///
/// ```rust
/// use nestree::node;
/// use nestree::sort::deep_sort_by;
/// use nestree::tree::Key;
///
/// let sorted = deep_sort_by(&node!({ "null": 3, "b": 1, "a": 2 }), |key, _| key.as_str() == "null");
/// let keys: Vec<&str> = sorted.keys().map(Key::as_str).collect();
/// assert_eq!(keys, vec!["b", "a", "null"]);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(entries = tree.len()))]
pub fn deep_sort_by<K, F>(tree: &Node, mut sort_key: F) -> Node
where
    K: Ord,
    F: FnMut(&Key, Option<&Tree>) -> K,
{
    sort_node(tree, &mut sort_key)
}

fn sort_node<K, F>(node: &Node, sort_key: &mut F) -> Node
where
    K: Ord,
    F: FnMut(&Key, Option<&Tree>) -> K,
{
    let mut keyed: Vec<(K, &Key, &Tree)> = node
        .iter()
        .map(|(key, value)| {
            let visible = if value.is_node() { None } else { Some(value) };
            (sort_key(key, visible), key, value)
        })
        .collect();
    keyed.sort_by(|left, right| left.0.cmp(&right.0));

    let mut sorted = Node::with_capacity(keyed.len());
    for (_, key, value) in keyed {
        let value = match value {
            Tree::Node(child) => Tree::Node(sort_node(child, sort_key)),
            other => other.clone(),
        };
        sorted.insert(key, value);
    }
    sorted
}
