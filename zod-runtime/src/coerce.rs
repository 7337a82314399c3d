//! Best-effort conversions applied before type checks.
//!
//! Each function follows JavaScript's conversion rules for the common cases.
//! Input that cannot be converted is returned unchanged so the downstream
//! type check reports it. Values already of the target type are returned as is.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::trace;

use crate::value::{Value, format_date, format_number};

/// Convert to a string.
///
/// Containers (arrays, objects, sets, maps) are not converted.
pub fn to_string(input: Value) -> Value {
    let out = match input {
        Value::String(_) => return input,
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::Date(d) => format_date(&d),
        other => return other,
    };
    trace!(target_type = "string", "Coerced value");
    Value::String(out)
}

/// Convert to a number.
///
/// Strings are trimmed; an empty string becomes 0 and `0x`/`0o`/`0b`
/// literals are read in their radix. Dates become epoch milliseconds.
/// Unparseable strings are not converted.
pub fn to_number(input: Value) -> Value {
    let converted = match &input {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Date(d) => Some(d.timestamp_millis() as f64),
        Value::String(s) => parse_number(s),
        _ => None,
    };
    match converted {
        Some(n) => {
            trace!(target_type = "number", "Coerced value");
            Value::Number(n)
        }
        None => input,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let is_special = unsigned.eq_ignore_ascii_case("nan")
        || unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity");
    // Rust accepts "inf", "nan" and any casing; JavaScript only "Infinity".
    if is_special && unsigned != "Infinity" {
        return None;
    }
    if let Some(n) = parse_radix_literal(trimmed) {
        return Some(n);
    }
    trimmed.parse::<f64>().ok()
}

/// Unsigned `0x`, `0o` and `0b` literals, as accepted by JavaScript's `Number()`.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Convert to a boolean using JavaScript truthiness.
pub fn to_boolean(input: Value) -> Value {
    if matches!(input, Value::Bool(_)) {
        return input;
    }
    trace!(target_type = "boolean", "Coerced value");
    Value::Bool(is_truthy(&input))
}

/// JavaScript truthiness: `false`, `0`, NaN, `""`, null and undefined are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Convert to a date.
///
/// Accepts RFC 3339 strings, `YYYY-MM-DD` (midnight UTC), naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC) and epoch milliseconds.
pub fn to_date(input: Value) -> Value {
    if matches!(input, Value::Date(_)) {
        return input;
    }
    let out = match &input {
        Value::String(s) => parse_date(s),
        Value::Number(n) if n.is_finite() => DateTime::from_timestamp_millis(n.trunc() as i64),
        _ => None,
    };
    match out {
        Some(date) => {
            trace!(target_type = "date", "Coerced value");
            Value::Date(date)
        }
        None => input,
    }
}

pub(crate) fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_string_primitives() {
        assert_eq!(to_string(Value::from(123)), Value::from("123"));
        assert_eq!(to_string(Value::from(true)), Value::from("true"));
        assert_eq!(to_string(Value::Null), Value::from("null"));
        assert_eq!(to_string(Value::from(vec![1])), Value::from(vec![1]));
    }

    #[test]
    fn test_to_number_strings() {
        assert_eq!(to_number(Value::from("100000")), Value::from(100_000));
        assert_eq!(to_number(Value::from(" 1.5 ")), Value::from(1.5));
        assert_eq!(to_number(Value::from("")), Value::from(0));
        assert_eq!(to_number(Value::from("abc")), Value::from("abc"));
        assert_eq!(to_number(Value::from("nan")), Value::from("nan"));
        assert_eq!(to_number(Value::from("-Infinity")), Value::Number(f64::NEG_INFINITY));
    }

    #[test]
    fn test_to_number_radix_literals() {
        assert_eq!(to_number(Value::from("0x10")), Value::from(16));
        assert_eq!(to_number(Value::from(" 0B101 ")), Value::from(5));
        assert_eq!(to_number(Value::from("0o17")), Value::from(15));
        assert_eq!(to_number(Value::from("0x")), Value::from("0x"));
        assert_eq!(to_number(Value::from("0x1g")), Value::from("0x1g"));
        assert_eq!(to_number(Value::from("-0x10")), Value::from("-0x10"));
    }

    #[test]
    fn test_to_boolean_truthiness() {
        assert_eq!(to_boolean(Value::from("123")), Value::Bool(true));
        assert_eq!(to_boolean(Value::from("false")), Value::Bool(true));
        assert_eq!(to_boolean(Value::from("")), Value::Bool(false));
        assert_eq!(to_boolean(Value::Null), Value::Bool(false));
        assert_eq!(to_boolean(Value::from(0)), Value::Bool(false));
    }

    #[test]
    fn test_to_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(to_date(Value::from("2024-03-01")), Value::Date(expected));
        assert_eq!(to_date(Value::from("2024-03-01T00:00:00Z")), Value::Date(expected));
        assert_eq!(
            to_date(Value::from(expected.timestamp_millis())),
            Value::Date(expected)
        );
        assert_eq!(to_date(Value::from("soon")), Value::from("soon"));
    }
}
