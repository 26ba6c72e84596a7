//! Error types for tree operations.
//!
//! Almost every operation in this crate is total: non-numeric leaves are
//! ignored or passed through, and zero totals are guarded. The errors here
//! cover the remaining cases where a value has the wrong shape.

use thiserror::Error;

use crate::tree::Key;

/// Represents errors that can occur while working with trees.
///
/// # Examples
///
/// ```rust
/// use nestree::error::TreeError;
///
/// let error = TreeError::InvalidInput {
///     expected: "node",
///     found: "sequence",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "invalid input: expected a node, found a sequence"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A value of one shape was supplied where another was required,
    /// e.g. a sequence where a node was expected.
    #[error("invalid input: expected a {expected}, found a {found}")]
    InvalidInput {
        /// The shape the operation needed.
        expected: &'static str,
        /// The shape that was supplied.
        found: &'static str,
    },

    /// Sibling branches mix nodes and non-node values, so they cannot be
    /// merged into a common template.
    #[error("cannot normalize: siblings mix nodes and leaves at depth {depth} (key `{key}`)")]
    ShapeMismatch {
        /// Nesting depth of the offending level, the root being 0.
        depth: usize,
        /// The first key whose value breaks the shape.
        key: Key,
    },
}
