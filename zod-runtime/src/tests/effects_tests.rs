//! Tests for modifiers, refinements and transforms

use crate::{Issue, IssueCode, PathSegment, Value, ZodType, z};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_optional_and_nullable() {
    assert_eq!(z::string().optional().parse(Value::Undefined).unwrap(), Value::Undefined);
    assert!(z::string().optional().safe_parse(Value::Null).is_failure());
    assert_eq!(z::string().nullable().parse(Value::Null).unwrap(), Value::Null);
    assert!(z::string().nullable().safe_parse(Value::Undefined).is_failure());
}

#[test]
fn test_default_fills_missing_value() {
    let schema = z::object().field("role", z::string().with_default("user"));
    let out = schema.parse(json!({})).unwrap();
    assert_eq!(out.get("role"), Some(&Value::from("user")));
    assert_eq!(z::number().with_default(3).expr(), "z.number().default(3)");
}

#[test]
fn test_refine_reports_custom_issue() {
    let schema = z::string().refine(|v| v.as_str() != Some("admin"), "Reserved name");
    let result = schema.safe_parse("admin");
    assert_eq!(result.issues()[0].code, IssueCode::Custom);
    assert_eq!(result.issues()[0].message, "Reserved name");
}

#[test]
fn test_refine_runs_after_constraint_failure() {
    let schema = z::string().min(10).refine(|_| false, "always");
    let codes: Vec<_> = schema.safe_parse("short").issues().iter().map(|i| i.code).collect();
    assert_eq!(codes, vec![IssueCode::TooSmall, IssueCode::Custom]);
}

#[test]
fn test_refine_skipped_after_type_mismatch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let schema = z::string().refine(
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        },
        "unused",
    );
    assert!(schema.safe_parse(1).is_failure());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_super_refine_paths_are_relative() {
    let schema = z::object()
        .field("password", z::string())
        .field("confirm", z::string())
        .super_refine(|value| {
            if value.get("password") != value.get("confirm") {
                vec![Issue::custom("Passwords do not match").at("confirm")]
            } else {
                Vec::new()
            }
        });
    let outer = z::object().field("account", schema);
    let result = outer.safe_parse(json!({ "account": { "password": "a", "confirm": "b" } }));
    assert_eq!(
        result.issues()[0].path,
        vec![PathSegment::from("account"), PathSegment::from("confirm")]
    );
}

#[test]
fn test_transform_maps_value() {
    let schema = z::string().transform(|v| Value::from(v.as_str().map_or(0, str::len)));
    assert_eq!(schema.parse("irda").unwrap(), Value::from(4));
}

#[test]
fn test_transform_skipped_when_dirty() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let schema = z::string().min(5).transform(move |v| {
        counter.fetch_add(1, Ordering::SeqCst);
        v
    });
    assert!(schema.safe_parse("abc").is_failure());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_try_transform_rejection_aborts() {
    let schema = z::string().try_transform(|v| match v.as_str().map(str::parse::<i64>) {
        Some(Ok(n)) => Ok(Value::from(n)),
        _ => Err(vec![Issue::custom("Not an integer")]),
    });
    assert_eq!(schema.parse("42").unwrap(), Value::from(42));

    let result = schema.safe_parse("4x");
    assert_eq!(result.issues().len(), 1);
    assert_eq!(result.issues()[0].message, "Not an integer");
}

#[test]
fn test_try_transform_empty_rejection() {
    let schema = z::string().try_transform(|_| Err(Vec::new()));
    let result = schema.safe_parse("x");
    assert_eq!(result.issues()[0].message, "Invalid input");
}

#[test]
fn test_aborted_child_fails_parent_without_extra_issue() {
    let schema = z::object()
        .field("port", z::string().try_transform(|_| Err(vec![Issue::custom("bad port")])))
        .field("host", z::string());
    let result = schema.safe_parse(json!({ "port": "x", "host": "localhost" }));
    assert_eq!(result.issues().len(), 1);
    assert_eq!(result.issues()[0].path_string(), "port");
}

#[test]
fn test_boxed_schema_is_shareable() {
    let schema = z::string().min(2).boxed();
    let copy = schema.clone();
    let handle = std::thread::spawn(move || copy.safe_parse("ok").is_success());
    assert!(handle.join().unwrap());
    assert!(schema.safe_parse("x").is_failure());
    assert_eq!(schema.expr(), "z.string().min(2)");
}
