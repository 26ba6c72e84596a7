//! The `tree!` and `node!` literal macros.

/// Builds a [`Tree`](crate::tree::Tree) from a literal.
///
/// # Syntax
///
/// - `tree!(null)` - The null leaf
/// - `tree!({ "key": value, ... })` - A node; keys are anything convertible
///   into [`Key`](crate::tree::Key)
/// - `tree!([value, ...])` - A sequence
/// - `tree!(expression)` - Any value convertible into a tree
///
/// Values nest, so `{ ... }`, `[ ... ]` and `null` may appear anywhere a
/// value is expected. Multi-token expressions such as negative numbers must
/// be parenthesized: `tree!({ "a": (-5) })`.
///
/// # Examples
///
/// ```rust
/// use nestree::tree;
/// use nestree::tree::{Leaf, Tree};
///
/// let tree = tree!({ "a": 1, "b": { "c": [2, null, "x"] } });
/// let node = tree.as_node().unwrap();
///
/// assert_eq!(node.get("a"), Some(&Tree::from(1)));
/// assert_eq!(format!("{tree}"), r#"{a: 1, b: {c: [2, null, "x"]}}"#);
/// assert_eq!(tree!(null), Tree::Leaf(Leaf::Null));
/// ```
#[macro_export]
macro_rules! tree {
    (null) => {
        $crate::tree::Tree::null()
    };

    ([ $($element:tt),* $(,)? ]) => {
        $crate::tree::Tree::Sequence(vec![ $( $crate::tree!($element) ),* ])
    };

    ({ $($body:tt)* }) => {
        $crate::tree::Tree::Node($crate::node!({ $($body)* }))
    };

    ($other:expr) => {
        $crate::tree::Tree::from($other)
    };
}

/// Builds a [`Node`](crate::tree::Node) from a `{ key: value, ... }` literal.
///
/// Values follow the same syntax as [`tree!`](crate::tree!). Repeated keys
/// keep their first position and their last value.
///
/// # Examples
///
/// ```rust
/// use nestree::node;
/// use nestree::tree::Key;
///
/// let node = node!({ "b": 1, "a": { "x": null } });
/// let keys: Vec<&str> = node.keys().map(Key::as_str).collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// ```
#[macro_export]
macro_rules! node {
    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut node = $crate::tree::Node::new();
        $( node.insert($key, $crate::tree!($value)); )*
        node
    }};
}

#[cfg(test)]
mod tests {
    use crate::tree::{Key, Leaf, Node, Tree};
    use rstest::rstest;

    #[rstest]
    fn test_tree_macro_scalars() {
        assert_eq!(tree!(null), Tree::Leaf(Leaf::Null));
        assert_eq!(tree!(1), Tree::Leaf(Leaf::Integer(1)));
        assert_eq!(tree!(2.5), Tree::Leaf(Leaf::Float(2.5)));
        assert_eq!(tree!("text"), Tree::Leaf(Leaf::String("text".into())));
        assert_eq!(tree!(true), Tree::Leaf(Leaf::Bool(true)));
        assert_eq!(tree!(-3), Tree::Leaf(Leaf::Integer(-3)));
    }

    #[rstest]
    fn test_tree_macro_sequence() {
        let tree = tree!([1, null, { "a": 2 }]);
        let mut inner = Node::new();
        inner.insert("a", 2);
        assert_eq!(
            tree,
            Tree::Sequence(vec![Tree::from(1), Tree::null(), Tree::Node(inner)])
        );
    }

    #[rstest]
    fn test_node_macro_nested() {
        let node = node!({ "a": { "x": 1 }, "b": [] });

        let mut inner = Node::new();
        inner.insert("x", 1);
        let mut expected = Node::new();
        expected.insert("a", inner);
        expected.insert("b", Tree::Sequence(Vec::new()));
        assert_eq!(node, expected);
    }

    #[rstest]
    fn test_node_macro_empty() {
        assert!(node!({}).is_empty());
        assert_eq!(tree!({}), Tree::Node(Node::new()));
    }

    #[rstest]
    fn test_node_macro_keeps_order() {
        let node = node!({ "z": 1, "m": 2, "a": 3, });
        let keys: Vec<&str> = node.keys().map(Key::as_str).collect();
        assert_eq!(keys, vec!["z", "m", "a"]);
    }

    #[rstest]
    fn test_node_macro_accepts_variables() {
        let value = 42;
        let key = "answer";
        let node = node!({ key: value });
        assert_eq!(node.get("answer"), Some(&Tree::from(42)));
    }
}
