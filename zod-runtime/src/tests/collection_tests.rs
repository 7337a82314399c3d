//! Tests for `z::array()`, `z::set()` and `z::map()`

use crate::{IssueCode, PathSegment, Value, ZodType, z};
use proptest::prelude::*;

#[test]
fn test_array_members_and_size() {
    let schema = z::array(z::number().int()).min(1).max(3);
    assert_eq!(schema.parse(vec![1, 2]).unwrap(), Value::from(vec![1, 2]));

    let result = schema.safe_parse(Value::Array(vec![]));
    assert_eq!(result.issues()[0].code, IssueCode::TooSmall);
    assert_eq!(result.issues()[0].message, "Array must contain at least 1 element(s)");
}

#[test]
fn test_array_member_paths() {
    let schema = z::array(z::string());
    let result = schema.safe_parse(Value::from(vec![
        Value::from("a"),
        Value::from(1),
        Value::from("c"),
        Value::Null,
    ]));
    let paths: Vec<_> = result.issues().iter().map(|i| i.path.clone()).collect();
    assert_eq!(paths, vec![vec![PathSegment::Index(1)], vec![PathSegment::Index(3)]]);
}

#[test]
fn test_array_size_checked_even_with_bad_members() {
    let schema = z::array(z::number()).length(3);
    let result = schema.safe_parse(vec!["x"]);
    let codes: Vec<_> = result.issues().iter().map(|i| i.code).collect();
    assert_eq!(codes, vec![IssueCode::InvalidType, IssueCode::TooSmall]);
    assert_eq!(result.issues()[1].message, "Array must contain exactly 3 element(s)");
}

#[test]
fn test_array_of_objects() {
    let schema = z::array(z::object().field("id", z::number()));
    let result = schema.safe_parse(serde_json::json!([{ "id": 1 }, { "id": "2" }]));
    assert_eq!(result.issues()[0].path_string(), "1.id");
}

#[test]
fn test_set_dedups_after_validation() {
    let schema = z::set(z::coerce::number());
    let out = schema.parse(Value::set(["1", "01", "2"])).unwrap();
    assert_eq!(out, Value::Set(vec![Value::from(1), Value::from(2)]));
}

#[test]
fn test_set_size() {
    let schema = z::set(z::string()).size(2);
    let result = schema.safe_parse(Value::set(["a"]));
    assert_eq!(result.issues()[0].message, "Set must contain exactly 2 element(s)");
    assert_eq!(
        z::set(z::string()).safe_parse(vec!["a"]).issues()[0].message,
        "Expected set, received array"
    );
}

#[test]
fn test_map_keys_and_values() {
    let schema = z::map(z::string(), z::number().positive());
    let ok = Value::map([("a", 1), ("b", 2)]);
    assert_eq!(schema.parse(ok.clone()).unwrap(), ok);

    let result = schema.safe_parse(Value::map([("a", 1), ("b", -2)]));
    assert_eq!(result.issues().len(), 1);
    assert_eq!(
        result.issues()[0].path,
        vec![PathSegment::from("b"), PathSegment::from("value")]
    );
}

#[test]
fn test_map_bad_key() {
    let schema = z::map(z::string(), z::number());
    let result = schema.safe_parse(Value::map([(1, 1)]));
    assert_eq!(result.issues()[0].message, "Expected string, received number");
    assert_eq!(result.issues()[0].path_string(), "1.key");
}

#[test]
fn test_map_key_and_value_failures_are_distinguished() {
    let schema = z::map(z::string().min(2), z::number());
    let result = schema.safe_parse(Value::map([("a", Value::from("x"))]));
    let paths: Vec<_> = result.issues().iter().map(|i| i.path_string()).collect();
    assert_eq!(paths, vec!["a.key", "a.value"]);
}

#[test]
fn test_expr() {
    assert_eq!(z::array(z::string()).min(1).expr(), "z.array(z.string()).min(1)");
    assert_eq!(z::set(z::number()).size(2).expr(), "z.set(z.number()).size(2)");
    assert_eq!(
        z::map(z::string(), z::boolean()).expr(),
        "z.map(z.string(), z.boolean())"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every invalid member is reported at its own index
    #[test]
    fn prop_invalid_members_reported_by_index(flags in proptest::collection::vec(any::<bool>(), 0..20)) {
        let members: Vec<Value> = flags
            .iter()
            .map(|&valid| if valid { Value::from("ok") } else { Value::from(0) })
            .collect();
        let expected: Vec<String> = flags
            .iter()
            .enumerate()
            .filter(|(_, valid)| !**valid)
            .map(|(i, _)| i.to_string())
            .collect();

        let result = z::array(z::string()).safe_parse(Value::Array(members));
        let paths: Vec<String> = result.issues().iter().map(|i| i.path_string()).collect();
        prop_assert_eq!(paths, expected);
    }
}
