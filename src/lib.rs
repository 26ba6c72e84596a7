//! # nestree
//!
//! Recursive transformations over arbitrarily nested key-value trees.
//!
//! ## Overview
//!
//! A [`Tree`](tree::Tree) is either a scalar [`Leaf`](tree::Leaf), an
//! insertion-ordered [`Node`](tree::Node) mapping keys to further trees, or a
//! `Sequence` of trees. Every operation in this crate consumes a borrowed tree
//! and returns a freshly built one; inputs are never mutated.
//!
//! - **Deep Sum**: sum every numeric leaf across nodes and sequences
//! - **Deep Invert**: reverse the key path leading to each leaf
//! - **Deep Sort**: reorder keys at every nesting level
//! - **Deep Normalize**: give every sibling branch the union of all leaf shapes
//! - **Percentage**: turn numeric leaves into percentages of a total
//! - **Nested**: build a nested node from ordered key levels
//!
//! ## Feature Flags
//!
//! - `sum`: [`deep_sum`](sum::deep_sum)
//! - `invert`: [`deep_invert`](invert::deep_invert)
//! - `sort`: [`deep_sort`](sort::deep_sort) and `deep_sort_by`
//! - `merge`: [`deep_merge`](merge::deep_merge), the recursive merge primitive
//! - `normalize`: [`deep_normalize`](normalize::deep_normalize) (enables `merge`)
//! - `percentage`: percentage conversion (enables `sum`)
//! - `nested`: [`to_nested_h`](nested::to_nested_h)
//! - `serde`: `Serialize`/`Deserialize` for the tree types and option objects
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use nestree::prelude::*;
//!
//! let scores = node!({ "a": { "x": 1 }, "b": { "x": 2, "y": 3 } });
//!
//! let inverted = deep_invert(&scores);
//! assert_eq!(inverted, node!({ "x": { "a": 1, "b": 2 }, "y": { "b": 3 } }));
//! assert_eq!(deep_sum(&scores), 6.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the tree types, the `tree!`/`node!` macros and every enabled
/// operation.
///
/// # Usage
///
/// ```rust
/// use nestree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::TreeError;
    pub use crate::{node, tree};
    pub use crate::tree::{Key, Leaf, Node, Tree};

    #[cfg(feature = "sum")]
    pub use crate::sum::*;

    #[cfg(feature = "invert")]
    pub use crate::invert::*;

    #[cfg(feature = "sort")]
    pub use crate::sort::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;

    #[cfg(feature = "normalize")]
    pub use crate::normalize::*;

    #[cfg(feature = "percentage")]
    pub use crate::percentage::*;

    #[cfg(feature = "nested")]
    pub use crate::nested::*;
}

pub mod error;
pub mod tree;

#[cfg(feature = "sum")]
pub mod sum;

#[cfg(feature = "invert")]
pub mod invert;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "normalize")]
pub mod normalize;

#[cfg(feature = "percentage")]
pub mod percentage;

#[cfg(feature = "nested")]
pub mod nested;

// Trees are plain owned values, so independent callers can share them freely.
static_assertions::assert_impl_all!(tree::Tree: Send, Sync, Clone);
static_assertions::assert_impl_all!(error::TreeError: Send, Sync, std::error::Error);
