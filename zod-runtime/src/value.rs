//! Dynamic values accepted and produced by schemas.
//!
//! [`Value`] is a superset of the JSON data model: besides the JSON variants
//! it can carry dates, sets, maps with non-string keys, and `Undefined` for
//! object keys that are absent from the input.
//!
//! # Example
//! ```rust
//! use zod_runtime::Value;
//!
//! let value = Value::from(serde_json::json!({ "name": "irda", "age": 30 }));
//! assert_eq!(value.get("name"), Some(&Value::from("irda")));
//! assert_eq!(value.to_json(), serde_json::json!({ "name": "irda", "age": 30 }));
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An absent value, e.g. a declared object key missing from the input.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. All numbers are IEEE-754 doubles.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// A point in time.
    Date(DateTime<Utc>),
    /// An ordered list.
    Array(Vec<Value>),
    /// An object with string keys.
    Object(BTreeMap<String, Value>),
    /// A collection of unique members in insertion order.
    Set(Vec<Value>),
    /// Ordered key/value entries. Keys may be any value.
    Map(Vec<(Value, Value)>),
}

/// The runtime type of a [`Value`], as reported in type mismatch messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `Value::Undefined`
    Undefined,
    /// `Value::Null`
    Null,
    /// `Value::Bool`
    Boolean,
    /// `Value::Number` holding a number other than NaN
    Number,
    /// `Value::Number` holding NaN
    Nan,
    /// `Value::String`
    String,
    /// `Value::Date`
    Date,
    /// `Value::Array`
    Array,
    /// `Value::Object`
    Object,
    /// `Value::Set`
    Set,
    /// `Value::Map`
    Map,
}

impl ValueKind {
    /// Returns the lowercase name used in issue messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Nan => "nan",
            Self::String => "string",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
            Self::Set => "set",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Build a set, dropping members equal to an earlier member.
    pub fn set<I, T>(members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut unique: Vec<Value> = Vec::new();
        for member in members {
            let member = member.into();
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        Value::Set(unique)
    }

    /// Build a map from key/value entries. A repeated key replaces the earlier entry's value.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.into(), value.into());
            match out.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => out.push((key, value)),
            }
        }
        Value::Map(out)
    }

    /// Build an object from key/value pairs.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The runtime type of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_nan() => ValueKind::Nan,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Date(_) => ValueKind::Date,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Set(_) => ValueKind::Set,
            Value::Map(_) => ValueKind::Map,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up an object key. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Convert into a JSON value.
    ///
    /// Dates become RFC 3339 strings, sets become arrays, maps become arrays
    /// of `[key, value]` pairs, and undefined or non-finite numbers become null.
    /// Integral numbers inside the safe integer range are emitted as JSON integers.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Value::Undefined | Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Date(d) => Json::String(format_date(d)),
            Value::Array(items) | Value::Set(items) => {
                Json::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Map(entries) => Json::Array(
                entries
                    .iter()
                    .map(|(k, v)| Json::Array(vec![k.to_json(), v.to_json()]))
                    .collect(),
            ),
        }
    }

    /// Serialize any `Serialize` type into a value via its JSON form.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Value::from)
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Format a number the way JavaScript's `String(n)` does.
///
/// Uses the shortest round-trip digits. Values with a decimal exponent below
/// -6 or of 21 and above are written in exponent form (`1e-7`, `1e+21`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "5.902958103587057e20"
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // position of the decimal point relative to the first digit
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let exp = point - 1;
        let sign = if exp < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exp.abs())
        }
    };

    if n < 0.0 { format!("-{}", body) } else { body }
}

pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => f.write_str(&format_date(d)),
            _ => write!(f, "{}", self.to_json()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(d) => serializer.serialize_str(&format_date(d)),
            Value::Array(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Map(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for entry in entries {
                    seq.serialize_element(&(&entry.0, &entry.1))?;
                }
                seq.end()
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_conversion_preserves_shape() {
        let json = json!({ "a": [1, 2.5, "x"], "b": null, "c": true });
        assert_eq!(Value::from(json.clone()).to_json(), json);
    }

    #[test]
    fn test_set_drops_duplicates() {
        assert_eq!(
            Value::set(["a", "b", "a"]),
            Value::Set(vec![Value::from("a"), Value::from("b")])
        );
    }

    #[test]
    fn test_map_repeated_key_replaces_value() {
        let map = Value::map([("k", 1), ("k", 2)]);
        assert_eq!(map, Value::Map(vec![(Value::from("k"), Value::from(2))]));
    }

    #[test]
    fn test_format_number_matches_javascript() {
        assert_eq!(format_number(123.0), "123");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(10_000_000.0), "10000000");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-42.25), "-42.25");
    }

    #[test]
    fn test_format_number_large_and_small_magnitudes() {
        assert_eq!(format_number(2f64.powi(69)), "590295810358705700000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.25e-7), "1.25e-7");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(123_456_789_012_345_680_000.0), "123456789012345680000");
    }

    #[test]
    fn test_kind_distinguishes_nan() {
        assert_eq!(Value::Number(f64::NAN).kind(), ValueKind::Nan);
        assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
    }

    #[test]
    fn test_serialize_map_as_pairs() {
        let map = Value::map([(1, "one")]);
        assert_eq!(serde_json::to_value(&map).unwrap(), json!([[1, "one"]]));
    }
}
