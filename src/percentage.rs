//! Conversion of numeric leaves into percentages.
//!
//! Two denominators are supported:
//!
//! - **Relative** (the default): every node divides its numeric leaves by its
//!   own deep sum, recomputed at each level.
//! - **Global**: every numeric leaf is divided by the deep sum of the whole
//!   tree.
//!
//! Non-numeric leaves and sequences pass through unchanged. A string that
//! spells a number is not converted, although it still counts toward the
//! totals computed by [`deep_sum`](crate::sum::deep_sum). Zero totals are
//! guarded: in global mode the input is handed back untouched, in relative
//! mode the leaves of a zero-sum node become `0.0`.

use std::borrow::Cow;

use crate::sum::deep_sum;
use crate::tree::{Node, Tree};

// =============================================================================
// Options
// =============================================================================

/// Configuration for [`deep_transform_values_to_percentages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PercentageOptions {
    /// `true` divides by each node's own total, `false` by the whole tree's.
    pub relative: bool,
    /// Decimal digits to round to; `None` keeps full precision.
    pub precision: Option<i32>,
}

impl Default for PercentageOptions {
    fn default() -> Self {
        Self::relative()
    }
}

impl PercentageOptions {
    /// Per-level percentages at full precision.
    pub const fn relative() -> Self {
        Self {
            relative: true,
            precision: None,
        }
    }

    /// Whole-tree percentages at full precision.
    pub const fn global() -> Self {
        Self {
            relative: false,
            precision: None,
        }
    }

    /// Chooses between per-level and whole-tree denominators.
    #[must_use]
    pub const fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// Rounds results to `precision` decimal digits, half away from zero.
    /// Negative values round to tens, hundreds and so on.
    #[must_use]
    pub const fn with_precision(mut self, precision: i32) -> Self {
        self.precision = Some(precision);
        self
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Replaces every numeric leaf of `tree` with its percentage of a total.
///
/// Returns [`Cow::Borrowed`] with the input itself when a global conversion
/// finds a zero total; every other call builds a new node.
///
/// # Examples
///
/// Global percentages:
///
/// ```rust
/// use nestree::node;
/// use nestree::percentage::{PercentageOptions, deep_transform_values_to_percentages};
///
/// let hash = node!({ "a": 50, "b": { "c": 30, "d": 20 }, "e": 100 });
/// let result = deep_transform_values_to_percentages(&hash, &PercentageOptions::global());
/// assert_eq!(
///     result.into_owned(),
///     node!({ "a": 25.0, "b": { "c": 15.0, "d": 10.0 }, "e": 50.0 })
/// );
/// ```
///
/// Relative percentages, rounded:
///
/// ```rust
/// use nestree::node;
/// use nestree::percentage::{PercentageOptions, deep_transform_values_to_percentages};
///
/// let hash = node!({ "a": 10, "b": { "x": 10, "y": 20 } });
/// let options = PercentageOptions::relative().with_precision(2);
/// assert_eq!(
///     deep_transform_values_to_percentages(&hash, &options).into_owned(),
///     node!({ "a": 25.0, "b": { "x": 33.33, "y": 66.67 } })
/// );
/// ```
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(entries = tree.len(), relative = options.relative, precision = ?options.precision)
)]
pub fn deep_transform_values_to_percentages<'a>(
    tree: &'a Node,
    options: &PercentageOptions,
) -> Cow<'a, Node> {
    let total = deep_sum(tree);
    if !options.relative && total == 0.0 {
        tracing::debug!("zero total, returning input unchanged");
        return Cow::Borrowed(tree);
    }
    Cow::Owned(convert(tree, total, options))
}

/// Per-level percentages with only a precision to choose.
///
/// Equivalent to [`deep_transform_values_to_percentages`] with
/// `relative = true`.
pub fn transform_values_to_percentages(tree: &Node, precision: Option<i32>) -> Cow<'_, Node> {
    let options = PercentageOptions {
        relative: true,
        precision,
    };
    deep_transform_values_to_percentages(tree, &options)
}

fn convert(node: &Node, total: f64, options: &PercentageOptions) -> Node {
    node.iter()
        .map(|(key, value)| {
            let converted = match value {
                Tree::Node(child) => {
                    let child_total = if options.relative {
                        deep_sum(child)
                    } else {
                        total
                    };
                    Tree::Node(convert(child, child_total, options))
                }
                Tree::Leaf(leaf) => leaf.as_f64().map_or_else(
                    || value.clone(),
                    |number| Tree::from(percentage_of(number, total, options.precision)),
                ),
                Tree::Sequence(_) => value.clone(),
            };
            (key, converted)
        })
        .collect()
}

fn percentage_of(value: f64, total: f64, precision: Option<i32>) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    let percentage = value / total * 100.0;
    precision.map_or(percentage, |digits| round_to(percentage, digits))
}

/// Rounds half away from zero at `digits` decimal places. Precisions beyond
/// what `f64` can scale keep the value, or give zero when negative.
fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    if factor == 0.0 {
        return 0.0;
    }
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
