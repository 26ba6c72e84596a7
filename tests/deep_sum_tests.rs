#![cfg(feature = "sum")]
//! Integration tests for deep summation.

use nestree::prelude::*;
use rstest::rstest;

// =============================================================================
// Reference Examples
// =============================================================================

#[rstest]
fn test_deep_sum_nested_nodes_and_sequences() {
    let data = node!({
        "a": 1,
        "b": { "c": 2, "d": { "e": 3, "f": 4 } },
        "g": [5, { "h": 6, "i": { "j": 7 } }]
    });
    assert_eq!(deep_sum(&data), 28.0);
}

#[rstest]
fn test_deep_sum_ignores_strings() {
    let data = node!({ "a": "hello", "b": 1, "c": [2, "world", { "d": 3 }] });
    assert_eq!(deep_sum(&data), 6.0);
}

#[rstest]
fn test_deep_sum_of_empty_node_is_zero() {
    assert_eq!(deep_sum(&node!({})), 0.0);
}

// =============================================================================
// Leaf Handling
// =============================================================================

#[rstest]
#[case(node!({ "a": "10", "b": 5 }), 15.0)]
#[case(node!({ "a": "hello", "b": "7 days", "c": ["1.5", null] }), 8.5)]
#[case(node!({ "a": null, "b": true, "c": false }), 0.0)]
#[case(node!({ "a": 1.25, "b": 0.75 }), 2.0)]
#[case(node!({ "a": (-3), "b": { "c": 1 } }), -2.0)]
fn test_deep_sum_leaf_kinds(#[case] data: Node, #[case] expected: f64) {
    assert!((deep_sum(&data) - expected).abs() < f64::EPSILON);
}

#[rstest]
fn test_deep_sum_on_sequence_root() {
    let elements = vec![tree!(1), tree!({ "a": [2, 3] }), tree!("x")];
    assert_eq!(deep_sum(&elements), 6.0);
}

#[rstest]
fn test_deep_sum_via_trait_method() {
    let data = node!({ "a": { "b": 2 }, "c": [3] });
    assert_eq!(data.deep_sum(), 5.0);
    assert_eq!(Tree::Node(data).deep_sum(), 5.0);
}

// =============================================================================
// Additivity
// =============================================================================

#[rstest]
fn test_deep_sum_distributes_over_siblings() {
    let left = node!({ "a": { "x": 1, "y": [2, { "z": 3 }] } });
    let right = node!({ "b": [4, "five"], "c": 6.5 });
    let mut whole = left.clone();
    whole.extend(right.clone());
    assert!((deep_sum(&whole) - (deep_sum(&left) + deep_sum(&right))).abs() < 1e-12);
}
