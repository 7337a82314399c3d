//! Tests for ZodError, Issue and the crate error

use crate::{Error, Issue, IssueCode, PathSegment, ZodError, ZodType, z};
use serde::Deserialize;
use serde_json::json;

fn signup() -> crate::ObjectSchema {
    z::object()
        .field("name", z::string().min(3))
        .field("age", z::number().min(18))
        .field("tags", z::array(z::string()))
}

#[test]
fn test_parse_error_aggregates_all_issues() {
    let err = signup()
        .parse(json!({ "name": "ab", "age": 3, "tags": ["x", 1] }))
        .unwrap_err();
    assert_eq!(err.issues.len(), 3);
    assert_eq!(err.issues(), signup().safe_parse(json!({ "name": "ab", "age": 3, "tags": ["x", 1] })).issues());
}

#[test]
fn test_flatten() {
    let schema = signup().refine(|_| false, "Form rejected");
    let err = schema.parse(json!({ "name": "ab", "age": 20, "tags": ["x"] })).unwrap_err();
    let flat = err.flatten();
    assert_eq!(flat.form_errors, vec!["Form rejected".to_string()]);
    assert_eq!(flat.field_errors["name"], vec!["String must contain at least 3 character(s)"]);
    assert_eq!(flat.field_errors.len(), 1);
}

#[test]
fn test_errors_by_path_and_issues_at() {
    let err = signup().parse(json!({ "name": "ab", "tags": [1] })).unwrap_err();
    let by_path = err.errors_by_path();
    assert_eq!(by_path.keys().collect::<Vec<_>>(), vec!["age", "name", "tags.0"]);
    let at = err.issues_at(&[PathSegment::from("tags"), PathSegment::Index(0)]);
    assert_eq!(at.len(), 1);
    assert!(at[0].code.is_type_mismatch());
}

#[test]
fn test_issue_code_classification() {
    assert_eq!(IssueCode::TooSmall.as_str(), "too_small");
    assert!(IssueCode::TooBig.is_range_violation());
    assert!(IssueCode::InvalidString.is_format_violation());
    assert!(!IssueCode::Custom.is_type_mismatch());
}

#[test]
fn test_issue_serializes_with_zod_shape() {
    let issue = Issue::custom("bad").at(2usize).at("items");
    assert_eq!(
        serde_json::to_value(&issue).unwrap(),
        json!({ "code": "custom", "path": ["items", 2], "message": "bad" })
    );
}

#[test]
fn test_zod_error_display() {
    let err = ZodError::new(vec![
        Issue::required().at("name"),
        Issue::custom("Form rejected"),
    ]);
    insta::assert_snapshot!(err.to_string(), @r"
    2 validation issue(s)
      - [invalid_type] name: Required
      - [custom] Form rejected
    ");
}

#[derive(Debug, Deserialize, PartialEq)]
struct Signup {
    name: String,
    age: u32,
    tags: Vec<String>,
}

#[test]
fn test_parse_as_typed() {
    let signup: Signup = signup()
        .parse_as(json!({ "name": "Irda", "age": 30, "tags": ["a"], "extra": true }))
        .unwrap();
    assert_eq!(
        signup,
        Signup { name: "Irda".into(), age: 30, tags: vec!["a".into()] }
    );
}

#[test]
fn test_parse_as_errors() {
    let invalid = signup().parse_as::<Signup>(json!({ "name": "I" }));
    assert!(matches!(invalid, Err(Error::Validation(_))));

    let mismatched = z::number().parse_as::<String>(5);
    assert!(matches!(mismatched, Err(Error::Deserialize(_))));
}
