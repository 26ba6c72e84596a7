//! Deep normalization of sibling branches.
//!
//! [`deep_normalize`] gives every branch of a node the union of the leaf
//! shapes found across its siblings. It first builds a skeleton holding the
//! default value everywhere, then deep-merges the original tree on top of it
//! so that every real value survives.
//!
//! # Examples
//!
//! ```rust
//! use nestree::{node, tree};
//! use nestree::normalize::{NormalizeOptions, deep_normalize};
//!
//! let hash = node!({ "a": { "x": 1, "y": 2 }, "b": { "z": 3 } });
//! let options = NormalizeOptions::new().with_default_value(tree!(0));
//!
//! assert_eq!(
//!     deep_normalize(&hash, &options).unwrap(),
//!     node!({ "a": { "x": 1, "y": 2, "z": 0 }, "b": { "x": 0, "y": 0, "z": 3 } })
//! );
//! ```

use crate::error::TreeError;
use crate::merge::{deep_merge, merge_into};
use crate::tree::{Node, Tree};

// =============================================================================
// Options
// =============================================================================

/// Configuration for [`deep_normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// Value written wherever a branch lacks a key found in a sibling.
    /// Defaults to null.
    pub default_value: Tree,
}

impl NormalizeOptions {
    /// Creates options with a null default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value used to fill missing leaves.
    #[must_use]
    pub fn with_default_value(mut self, default_value: impl Into<Tree>) -> Self {
        self.default_value = default_value.into();
        self
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Fills every branch of `tree` with the union of its siblings' leaf keys.
///
/// Missing leaves receive `options.default_value`; existing values are kept.
///
/// # Errors
///
/// Returns [`TreeError::ShapeMismatch`] when the children being combined
/// into a template mix nodes with non-node values, since such siblings have
/// no common shape.
#[tracing::instrument(level = "trace", skip_all, fields(entries = tree.len()))]
pub fn deep_normalize(tree: &Node, options: &NormalizeOptions) -> Result<Node, TreeError> {
    let skeleton = build_default(tree, &options.default_value, 0)?;
    Ok(deep_merge(&skeleton, tree))
}

/// Builds the defaults-only shape of `node`.
///
/// A level of leaves maps every key to the default. A level of nodes merges
/// all children into one template, builds its shape, and gives that shape to
/// every key.
fn build_default(node: &Node, default_value: &Tree, depth: usize) -> Result<Node, TreeError> {
    if !node.values().any(Tree::is_node) {
        return Ok(node
            .keys()
            .map(|key| (key, default_value.clone()))
            .collect());
    }

    let mut template = Node::new();
    for (key, value) in node {
        let Tree::Node(child) = value else {
            return Err(TreeError::ShapeMismatch {
                depth,
                key: key.clone(),
            });
        };
        merge_into(&mut template, child);
    }

    let shape = Tree::Node(build_default(&template, default_value, depth + 1)?);
    Ok(node.keys().map(|key| (key, shape.clone())).collect())
}
