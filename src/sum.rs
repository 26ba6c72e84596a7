//! Deep summation of numeric leaves.
//!
//! Aggregation is permissive: leaves are coerced with
//! [`Leaf::coerce_f64`](crate::tree::Leaf::coerce_f64), so a string counts
//! for the number it starts with, and text, booleans and nulls contribute `0`
//! instead of failing. Mixed trees can always be summed.

use crate::tree::{Node, Tree};

/// Types whose numeric leaves can be summed recursively.
///
/// Implemented for [`Node`], sequences of trees and [`Tree`] itself.
pub trait DeepSum {
    /// Returns the sum of every numeric leaf reachable from `self`.
    fn deep_sum(&self) -> f64;
}

impl DeepSum for Node {
    fn deep_sum(&self) -> f64 {
        self.values().map(value_sum).sum()
    }
}

impl DeepSum for [Tree] {
    fn deep_sum(&self) -> f64 {
        self.iter().map(element_sum).sum()
    }
}

impl DeepSum for Vec<Tree> {
    fn deep_sum(&self) -> f64 {
        self.as_slice().deep_sum()
    }
}

impl DeepSum for Tree {
    fn deep_sum(&self) -> f64 {
        value_sum(self)
    }
}

/// Contribution of a value held directly by a node.
fn value_sum(value: &Tree) -> f64 {
    match value {
        Tree::Node(node) => node.deep_sum(),
        Tree::Sequence(elements) => elements.deep_sum(),
        Tree::Leaf(leaf) => leaf.coerce_f64(),
    }
}

/// Contribution of a sequence element: nodes recurse, numbers count, and
/// anything else (nested sequences included) is zero.
fn element_sum(element: &Tree) -> f64 {
    match element {
        Tree::Node(node) => node.deep_sum(),
        Tree::Leaf(leaf) => leaf.coerce_f64(),
        Tree::Sequence(_) => 0.0,
    }
}

/// Sums every numeric leaf in a node, a sequence, or a tree.
///
/// # Examples
///
/// ```rust
/// use nestree::{node, tree};
/// use nestree::sum::deep_sum;
///
/// let data = node!({
///     "a": 1,
///     "b": { "c": 2, "d": { "e": 3, "f": 4 } },
///     "g": [5, { "h": 6, "i": { "j": 7 } }]
/// });
/// assert_eq!(deep_sum(&data), 28.0);
///
/// let mixed = tree!([2, "world", { "d": 3 }]);
/// assert_eq!(deep_sum(&mixed), 5.0);
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn deep_sum<T: DeepSum + ?Sized>(tree: &T) -> f64 {
    tree.deep_sum()
}
