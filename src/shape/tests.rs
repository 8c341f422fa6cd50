//! Tests for shape module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
        .collect()
}

// ============================================================================
// OneOrMany Tests
// ============================================================================

#[test]
fn test_one_or_many_len() {
    assert_eq!(OneOrMany::<u8>::Empty.len(), 0);
    assert!(OneOrMany::<u8>::Empty.is_empty());
    assert_eq!(OneOrMany::One(1).len(), 1);
    assert_eq!(OneOrMany::Many(vec![1, 2, 3]).len(), 3);
}

#[test]
fn test_one_or_many_into_vec_and_map() {
    assert_eq!(OneOrMany::One(2).map(|n| n * 10).into_vec(), vec![20]);
    assert_eq!(
        OneOrMany::Many(vec![1, 2]).map(|n| n + 1).into_vec(),
        vec![2, 3]
    );
    let collected: Vec<i32> = OneOrMany::Empty.into_iter().collect();
    assert!(collected.is_empty());
}

#[test]
fn test_of_objects_classifies() {
    let obj = json!({"id": "a"});
    assert_eq!(
        OneOrMany::of_objects(Some(&obj), "job").unwrap(),
        OneOrMany::One(&obj)
    );
    assert_eq!(
        OneOrMany::of_objects(None, "job").unwrap(),
        OneOrMany::Empty
    );
    assert_eq!(
        OneOrMany::of_objects(Some(&Value::Null), "job").unwrap(),
        OneOrMany::Empty
    );
}

// ============================================================================
// normalize Tests
// ============================================================================

#[test]
fn test_normalize_single_object() {
    let obj = json!({"id": "abc123"});
    assert_eq!(normalize(Some(&obj), "job").unwrap(), vec![&obj]);
}

#[test]
fn test_normalize_array_keeps_order_and_nulls() {
    let node = json!([{"id": "a"}, null, {"id": "b"}]);
    let seq = normalize(Some(&node), "job").unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq[0]["id"], "a");
    assert!(seq[1].is_null());
    assert_eq!(seq[2]["id"], "b");
}

#[test]
fn test_normalize_null_and_absent() {
    assert!(normalize(Some(&Value::Null), "job").unwrap().is_empty());
    assert!(normalize(None, "job").unwrap().is_empty());
}

#[test]
fn test_normalize_scalar_is_shape_error() {
    for node in [json!("abc"), json!(12), json!(true)] {
        match normalize(Some(&node), "response.job") {
            Err(Error::Shape { path, .. }) => assert_eq!(path, "response.job"),
            other => panic!("expected shape error, got {other:?}"),
        }
    }
}

#[test]
fn test_normalize_values_bare_scalar() {
    let node = json!("s3://mynicebucket");
    assert_eq!(normalize_values(Some(&node)), vec![&node]);

    let node = json!([null, "Saved"]);
    let seq = normalize_values(Some(&node));
    assert_eq!(seq.len(), 2);
    assert!(seq[0].is_null());

    assert!(normalize_values(Some(&Value::Null)).is_empty());
    assert!(normalize_values(None).is_empty());
}

// ============================================================================
// align Tests
// ============================================================================

#[test]
fn test_align_null_status() {
    let result = align(&[Some("a"), Some("b")], &[Some("A"), None]);
    assert_eq!(result, pairs(&[("a", "A"), ("b", "")]));
}

#[test]
fn test_align_more_statuses_than_names() {
    let result = align(&[Some("a")], &[Some("A"), Some("B")]);
    assert_eq!(result, pairs(&[("a", "A"), ("", "B")]));
}

#[test]
fn test_align_leading_nulls() {
    let result = align(
        &[None, Some("s3://myunclebucket/file.mp4")],
        &[None, Some("Saved")],
    );
    assert_eq!(
        result,
        pairs(&[("", ""), ("s3://myunclebucket/file.mp4", "Saved")])
    );
}

#[test]
fn test_align_missing_statuses() {
    let statuses: [Option<&str>; 0] = [];
    let result = align(&[Some("x"), Some("y")], &statuses);
    assert_eq!(result, pairs(&[("x", ""), ("y", "")]));
}

#[test]
fn test_align_both_empty() {
    let empty: [Option<String>; 0] = [];
    assert!(align(&empty, &empty).is_empty());
}
