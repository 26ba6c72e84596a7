#![cfg(feature = "serde")]

//! Integration tests for serde support in nestree.
//!
//! JSON objects load as nodes in document order, arrays as sequences and
//! scalars as leaves; the option objects load from partial documents.

use nestree::prelude::*;
use rstest::rstest;

// =============================================================================
// Tree Tests
// =============================================================================

#[rstest]
fn test_node_json_roundtrip() {
    let node = node!({ "b": { "x": 1, "y": [2.5, null, "s"] }, "a": true });
    let json = serde_json::to_string(&node).unwrap();
    let restored: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(node, restored);
}

#[rstest]
fn test_node_json_preserves_document_order() {
    let restored: Node = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = restored.keys().map(Key::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(serde_json::to_string(&restored).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
}

#[rstest]
#[case("1", Tree::Leaf(Leaf::Integer(1)))]
#[case("1.0", Tree::Leaf(Leaf::Float(1.0)))]
#[case("18446744073709551615", Tree::Leaf(Leaf::Float(18_446_744_073_709_551_615.0)))]
#[case("null", Tree::null())]
#[case("[1, [2]]", tree!([1, [2]]))]
fn test_tree_json_scalars(#[case] json: &str, #[case] expected: Tree) {
    let tree: Tree = serde_json::from_str(json).unwrap();
    assert_eq!(tree, expected);
}

#[rstest]
fn test_node_rejects_array() {
    assert!(serde_json::from_str::<Node>("[1, 2]").is_err());
}

// =============================================================================
// Options Tests
// =============================================================================

#[cfg(feature = "percentage")]
#[rstest]
fn test_percentage_options_from_partial_json() {
    let options: PercentageOptions = serde_json::from_str(r#"{"precision": 2}"#).unwrap();
    assert_eq!(options, PercentageOptions::relative().with_precision(2));

    let global: PercentageOptions = serde_json::from_str(r#"{"relative": false}"#).unwrap();
    assert_eq!(global, PercentageOptions::global());
}

#[cfg(feature = "normalize")]
#[rstest]
fn test_normalize_options_from_json() {
    let options: NormalizeOptions = serde_json::from_str(r#"{"default_value": 0}"#).unwrap();
    assert_eq!(options, NormalizeOptions::new().with_default_value(0));

    let empty: NormalizeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.default_value, Tree::null());
}

#[cfg(all(feature = "percentage", feature = "invert"))]
#[rstest]
fn test_operations_on_loaded_json() {
    let node: Node =
        serde_json::from_str(r#"{"north": {"q1": 10, "q2": 30}, "south": {"q1": 60}}"#).unwrap();
    let inverted = deep_invert(&node);
    assert_eq!(inverted, node!({ "q1": { "north": 10, "south": 60 }, "q2": { "north": 30 } }));

    let shares = deep_transform_values_to_percentages(&node, &PercentageOptions::global());
    assert_eq!(
        serde_json::to_string(&*shares).unwrap(),
        r#"{"north":{"q1":10.0,"q2":30.0},"south":{"q1":60.0}}"#
    );
}
