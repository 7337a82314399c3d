//! Tests for `z::number()`

use crate::{IssueCode, Value, ZodType, z};
use proptest::prelude::*;

#[test]
fn test_inclusive_bounds() {
    let schema = z::number().min(100).max(10_000_000);
    assert_eq!(schema.parse(10_000).unwrap(), Value::from(10_000));
    assert!(schema.safe_parse(100).is_success());
    assert!(schema.safe_parse(10_000_000).is_success());

    let result = schema.safe_parse(99);
    assert_eq!(result.issues()[0].code, IssueCode::TooSmall);
    assert_eq!(result.issues()[0].message, "Number must be greater than or equal to 100");
}

#[test]
fn test_exclusive_bounds() {
    let schema = z::number().gt(0).lt(10);
    assert!(schema.safe_parse(0).is_failure());
    assert!(schema.safe_parse(10).is_failure());
    assert!(schema.safe_parse(5).is_success());
    assert_eq!(
        schema.safe_parse(10).issues()[0].message,
        "Number must be less than 10"
    );
}

#[test]
fn test_sign_helpers() {
    assert!(z::number().positive().safe_parse(0).is_failure());
    assert!(z::number().negative().safe_parse(-1).is_success());
    assert!(z::number().nonnegative().safe_parse(0).is_success());
    assert!(z::number().nonpositive().safe_parse(1).is_failure());
}

#[test]
fn test_int() {
    let schema = z::number().int();
    assert!(schema.safe_parse(3).is_success());
    let result = schema.safe_parse(3.5);
    assert_eq!(result.issues()[0].code, IssueCode::InvalidType);
    assert_eq!(result.issues()[0].message, "Expected integer, received float");
}

#[test]
fn test_multiple_of_tolerates_rounding() {
    let schema = z::number().multiple_of(0.1);
    assert!(schema.safe_parse(0.3).is_success());
    assert!(schema.safe_parse(0.35).is_failure());
    assert_eq!(
        z::number().multiple_of(5).safe_parse(7).issues()[0].code,
        IssueCode::NotMultipleOf
    );
}

#[test]
fn test_nan_is_type_mismatch() {
    let result = z::number().safe_parse(f64::NAN);
    assert_eq!(result.issues()[0].code, IssueCode::InvalidType);
    assert_eq!(result.issues()[0].message, "Expected number, received nan");
}

#[test]
fn test_infinity_needs_finite_check() {
    assert!(z::number().safe_parse(f64::INFINITY).is_success());
    let result = z::number().finite().safe_parse(f64::INFINITY);
    assert_eq!(result.issues()[0].code, IssueCode::NotFinite);
}

#[test]
fn test_all_failing_checks_are_reported() {
    let schema = z::number().min(10).int().multiple_of(3);
    let codes: Vec<_> = schema.safe_parse(2.5).issues().iter().map(|i| i.code).collect();
    assert_eq!(
        codes,
        vec![IssueCode::TooSmall, IssueCode::InvalidType, IssueCode::NotMultipleOf]
    );
}

#[test]
fn test_string_input_is_not_coerced() {
    let result = z::number().safe_parse("42");
    assert_eq!(result.issues()[0].message, "Expected number, received string");
}

#[test]
fn test_check_message() {
    let schema = z::number().min(18).message("Must be an adult");
    assert_eq!(schema.safe_parse(17).issues()[0].message, "Must be an adult");
}

#[test]
fn test_expr() {
    let schema = z::number().min(100).max(10_000_000).int();
    assert_eq!(schema.expr(), "z.number().min(100).max(10000000).int()");
    assert_eq!(z::number().gt(0.5).expr(), "z.number().gt(0.5)");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any number inside inclusive bounds is accepted unchanged
    #[test]
    fn prop_in_range_accepted(n in 100i32..=10_000_000) {
        let schema = z::number().min(100).max(10_000_000);
        prop_assert_eq!(schema.parse(n).unwrap(), Value::from(n));
    }

    /// Any number below the minimum yields exactly one too_small issue
    #[test]
    fn prop_below_min_rejected(n in -1_000_000i32..100) {
        let schema = z::number().min(100).max(10_000_000);
        let result = schema.safe_parse(n);
        prop_assert_eq!(result.issues().len(), 1);
        prop_assert_eq!(result.issues()[0].code, IssueCode::TooSmall);
    }
}
