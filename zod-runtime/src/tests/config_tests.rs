//! Tests for ParseConfig and how it shapes a parse

use crate::{ConfigValidationError, Error, ParseConfig, UnknownKeys, ZodType, z};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_default_config() {
    let config = ParseConfig::default();
    assert_eq!(config.unknown_keys, UnknownKeys::Strip);
    assert!(!config.abort_early);
    assert_eq!(config.max_issues, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_max_issues() {
    let config = ParseConfig::new().with_max_issues(0);
    assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxIssues));
    assert_eq!(
        ConfigValidationError::InvalidMaxIssues.to_string(),
        "max_issues must be greater than 0"
    );
}

#[test]
fn test_from_json_fills_defaults() {
    let config = ParseConfig::from_json(r#"{ "unknown_keys": "passthrough" }"#).unwrap();
    assert_eq!(config.unknown_keys, UnknownKeys::Passthrough);
    assert_eq!(config.max_issues, 100);
}

#[test]
fn test_from_json_errors() {
    assert!(matches!(
        ParseConfig::from_json(r#"{ "max_issues": 0 }"#),
        Err(Error::Config(ConfigValidationError::InvalidMaxIssues))
    ));
    assert!(matches!(
        ParseConfig::from_json(r#"{ "unknown_keys": "loose" }"#),
        Err(Error::Deserialize(_))
    ));
}

#[test]
fn test_abort_early_stops_at_first_issue() {
    let schema = z::object()
        .field("a", z::string())
        .field("b", z::string())
        .field("c", z::string().min(5));
    let input = json!({ "a": 1, "b": 2, "c": "x" });

    assert_eq!(schema.safe_parse(input.clone()).issues().len(), 3);

    let config = ParseConfig::new().with_abort_early(true);
    let result = schema.safe_parse_with(input.into(), &config);
    assert_eq!(result.issues().len(), 1);
    assert_eq!(result.issues()[0].path_string(), "a");
}

#[test]
fn test_abort_early_within_one_string() {
    let config = ParseConfig::new().with_abort_early(true);
    let schema = z::string().min(10).email();
    let err = schema.parse_with("abc", &config).unwrap_err();
    assert_eq!(err.issues.len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// The number of collected issues never exceeds max_issues
    #[test]
    fn prop_max_issues_caps_collection(len in 0usize..60, max in 1usize..30) {
        let config = ParseConfig::new().with_max_issues(max);
        let input = crate::Value::Array((0..len).map(|i| crate::Value::from(i)).collect());
        let result = z::array(z::string()).safe_parse_with(input, &config);
        prop_assert_eq!(result.issues().len(), len.min(max));
    }
}
