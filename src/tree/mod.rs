//! The nested key-value tree model.
//!
//! This module provides the single recursive data type every operation in
//! this crate works on:
//!
//! - [`Leaf`]: a terminal scalar (null, boolean, integer, float or string)
//! - [`Node`]: an insertion-ordered mapping from [`Key`] to [`Tree`]
//! - [`Tree`]: a leaf, a node, or a sequence of trees
//!
//! # Examples
//!
//! ```rust
//! use nestree::tree::{Node, Tree};
//!
//! let mut inner = Node::new();
//! inner.insert("x", 1);
//!
//! let mut node = Node::new();
//! node.insert("a", inner);
//! node.insert("b", "text");
//!
//! assert_eq!(node.len(), 2);
//! assert!(node.get("a").is_some_and(Tree::is_node));
//! assert_eq!(format!("{node}"), r#"{a: {x: 1}, b: "text"}"#);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;

use crate::error::TreeError;

mod macros;

#[cfg(feature = "serde")]
mod serialization;

// =============================================================================
// Key
// =============================================================================

/// A key inside a [`Node`].
///
/// Keys are ordered, hashable string atoms. Integers and characters convert
/// into their textual form, so `Key::from(10)` equals `Key::from("10")`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Key(String);

impl Key {
    /// Creates a key from anything convertible into a `String`.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for Key {
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

impl From<&Self> for Key {
    fn from(key: &Self) -> Self {
        key.clone()
    }
}

impl From<char> for Key {
    fn from(character: char) -> Self {
        Self(character.to_string())
    }
}

macro_rules! impl_key_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Key {
                fn from(number: $integer) -> Self {
                    Self(number.to_string())
                }
            }
        )*
    };
}

impl_key_from_integer!(i32, i64, u32, u64, usize);

// =============================================================================
// Leaf
// =============================================================================

/// A terminal, non-node value.
///
/// `Leaf` has a total order so that sort keys may be built from leaf values:
/// `Null < Bool < numbers < String`. Numbers compare numerically across
/// `Integer` and `Float`; when they are numerically equal the `Integer`
/// sorts first, which keeps ordering consistent with equality
/// (`Integer(1) != Float(1.0)`). Floats compare with [`f64::total_cmp`].
#[derive(Clone, Debug, Default)]
pub enum Leaf {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
}

impl Leaf {
    /// Returns `true` for [`Leaf::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the numeric value of an `Integer` or `Float` leaf.
    ///
    /// Every other variant, numeric-looking strings included, yields `None`.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Coerces the leaf to a number for aggregation.
    ///
    /// Numbers convert as they are. A string contributes the number written
    /// at its start (`"10"`, `" 2.5kg"`, `"1_000"`, `"1e3"`), or `0.0` when it
    /// does not start with one. Null and booleans contribute `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestree::tree::Leaf;
    ///
    /// assert_eq!(Leaf::String("10".into()).coerce_f64(), 10.0);
    /// assert_eq!(Leaf::String("12.5%".into()).coerce_f64(), 12.5);
    /// assert_eq!(Leaf::String("hello".into()).coerce_f64(), 0.0);
    /// assert_eq!(Leaf::Null.coerce_f64(), 0.0);
    /// ```
    pub fn coerce_f64(&self) -> f64 {
        match self {
            Self::String(text) => leading_number(text),
            other => other.as_f64().unwrap_or(0.0),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Float(_) => 2,
            Self::String(_) => 3,
        }
    }
}

/// Parses the decimal number at the start of `text`, ignoring leading
/// whitespace and single underscores between digits.
fn leading_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_start = end;
    end = skip_digits(bytes, end);
    let mut has_digits = end > integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = skip_digits(bytes, end + 1);
        if fraction_end > end + 1 {
            has_digits = true;
            end = fraction_end;
        }
    }
    if !has_digits {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = skip_digits(bytes, exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    text[..end].replace('_', "").parse().unwrap_or(0.0)
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while let Some(&byte) = bytes.get(index) {
        let joins_digits = byte == b'_'
            && index > 0
            && bytes[index - 1].is_ascii_digit()
            && bytes.get(index + 1).is_some_and(u8::is_ascii_digit);
        if !(byte.is_ascii_digit() || joins_digits) {
            break;
        }
        index += 1;
    }
    index
}

impl Ord for Leaf {
    #[allow(clippy::cast_precision_loss)]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Float(left), Self::Float(right)) => left.total_cmp(right),
            (Self::Integer(left), Self::Float(right)) => {
                (*left as f64).total_cmp(right).then(Ordering::Less)
            }
            (Self::Float(left), Self::Integer(right)) => {
                left.total_cmp(&(*right as f64)).then(Ordering::Greater)
            }
            (Self::String(left), Self::String(right)) => left.cmp(right),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Leaf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Leaf {}

impl fmt::Display for Leaf {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::String(value) => write!(formatter, "{value:?}"),
        }
    }
}

// =============================================================================
// Tree
// =============================================================================

/// A nested key-value tree: a leaf, a node, or a sequence of trees.
///
/// Equality is structural; node equality ignores key order, like mapping
/// equality. Use [`Node::keys`] to observe order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    /// A terminal scalar.
    Leaf(Leaf),
    /// A mapping from keys to subtrees.
    Node(Node),
    /// An ordered list of trees.
    Sequence(Vec<Self>),
}

impl Tree {
    /// Returns the null leaf.
    pub const fn null() -> Self {
        Self::Leaf(Leaf::Null)
    }

    /// Returns `true` if this tree is a [`Tree::Node`].
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Returns the node if this tree is one.
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the leaf if this tree is one.
    pub const fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Returns the numeric value of a numeric leaf.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Leaf(leaf) => leaf.as_f64(),
            _ => None,
        }
    }

    /// Names the shape of this tree: `"leaf"`, `"node"` or `"sequence"`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Leaf(_) => "leaf",
            Self::Node(_) => "node",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Borrows the node, or reports which shape was found instead.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidInput`] if this tree is not a node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestree::tree::Tree;
    /// use nestree::error::TreeError;
    ///
    /// let sequence = Tree::Sequence(vec![Tree::from(1)]);
    /// assert_eq!(
    ///     sequence.try_as_node(),
    ///     Err(TreeError::InvalidInput { expected: "node", found: "sequence" })
    /// );
    /// ```
    pub fn try_as_node(&self) -> Result<&Node, TreeError> {
        match self {
            Self::Node(node) => Ok(node),
            _ => Err(TreeError::InvalidInput {
                expected: "node",
                found: self.kind(),
            }),
        }
    }

    /// Unwraps the node, or reports which shape was found instead.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidInput`] if this tree is not a node.
    pub fn try_into_node(self) -> Result<Node, TreeError> {
        match self {
            Self::Node(node) => Ok(node),
            other => Err(TreeError::InvalidInput {
                expected: "node",
                found: other.kind(),
            }),
        }
    }

    /// Turns this slot into an empty node unless it already is one, and
    /// returns the node.
    fn make_node(&mut self) -> &mut Node {
        if !self.is_node() {
            tracing::debug!(replaced = self.kind(), "overwriting value with a node");
            *self = Self::Node(Node::new());
        }
        match self {
            Self::Node(node) => node,
            _ => unreachable!("slot was just replaced by a node"),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(formatter, "{leaf}"),
            Self::Node(node) => write!(formatter, "{node}"),
            Self::Sequence(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
        }
    }
}

impl From<Leaf> for Tree {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Node> for Tree {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Vec<Self>> for Tree {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(elements)
    }
}

impl<T: Into<Self>> From<Option<T>> for Tree {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

macro_rules! impl_from_scalar {
    ($($scalar:ty => $variant:ident via $convert:expr),* $(,)?) => {
        $(
            impl From<$scalar> for Leaf {
                fn from(value: $scalar) -> Self {
                    Self::$variant($convert(value))
                }
            }

            impl From<$scalar> for Tree {
                fn from(value: $scalar) -> Self {
                    Self::Leaf(Leaf::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool => Bool via std::convert::identity,
    i32 => Integer via i64::from,
    u32 => Integer via i64::from,
    i64 => Integer via std::convert::identity,
    f32 => Float via f64::from,
    f64 => Float via std::convert::identity,
    &str => String via str::to_owned,
    String => String via std::convert::identity,
);

// =============================================================================
// Node
// =============================================================================

/// An insertion-ordered mapping from [`Key`] to [`Tree`].
///
/// Inserting an existing key replaces its value in place, keeping the key's
/// original position. Equality ignores order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    entries: IndexMap<Key, Tree>,
}

impl Node {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty node with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the node has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tree> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `value` under `key`, returning the previous value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nestree::tree::{Key, Node, Tree};
    ///
    /// let mut node = Node::new();
    /// node.insert("b", 1);
    /// node.insert("a", 2);
    /// let previous = node.insert("b", 3);
    ///
    /// assert_eq!(previous, Some(Tree::from(1)));
    /// let keys: Vec<&str> = node.keys().map(Key::as_str).collect();
    /// assert_eq!(keys, vec!["b", "a"]);
    /// ```
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Tree>) -> Option<Tree> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the child node under `key`, creating it if absent.
    ///
    /// A non-node value already stored under `key` is replaced by an empty
    /// node.
    pub fn entry_or_insert_node(&mut self, key: impl Into<Key>) -> &mut Self {
        self.entries
            .entry(key.into())
            .or_insert_with(|| Tree::Node(Self::new()))
            .make_node()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Tree> {
        self.entries.keys()
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Tree> {
        self.entries.values()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Tree> {
        self.entries.iter()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        formatter.write_str("}")
    }
}

impl<K: Into<Key>, V: Into<Tree>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = Self::new();
        node.extend(iter);
        node
    }
}

impl<K: Into<Key>, V: Into<Tree>> Extend<(K, V)> for Node {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Node {
    type Item = (Key, Tree);
    type IntoIter = indexmap::map::IntoIter<Key, Tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a Key, &'a Tree);
    type IntoIter = indexmap::map::Iter<'a, Key, Tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
