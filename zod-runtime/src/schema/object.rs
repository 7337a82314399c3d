//! `z.object({ ... })`

use std::collections::BTreeMap;
use tracing::trace;

use super::{Optional, Schema, TypeMessages, ZodType};
use crate::config::UnknownKeys;
use crate::context::{Aborted, ParseContext, Step};
use crate::issue::{Issue, IssueCode};
use crate::value::Value;

/// Object schema.
///
/// Only declared keys are validated, each with its key appended to the path.
/// Every declared key is evaluated even after a sibling failed. Keys that
/// validate to `undefined` (e.g. missing optional fields) are left out of the
/// output. Undeclared keys follow the object's [`UnknownKeys`] policy, or the
/// parse configuration's default when none was set.
///
/// # Example
///
/// ```rust
/// use zod_runtime::{z, Value, ZodType};
///
/// let schema = z::object().field("a", z::number());
/// let out = schema.parse(serde_json::json!({ "a": 1, "b": 2 })).unwrap();
/// assert_eq!(out, Value::object([("a", 1)]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    shape: Vec<(String, Schema)>,
    unknown_keys: Option<UnknownKeys>,
    messages: TypeMessages,
}

super::impl_type_messages!(ObjectSchema);

impl ObjectSchema {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Declare a key. Redeclaring a key replaces its schema in place.
    #[must_use = "schema builders return a new schema"]
    pub fn field(mut self, key: impl Into<String>, schema: impl ZodType + 'static) -> Self {
        let key = key.into();
        let schema = schema.boxed();
        match self.shape.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = schema,
            None => self.shape.push((key, schema)),
        }
        self
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.shape.iter().map(|(k, _)| k.as_str())
    }

    /// The schema declared for `key`.
    pub fn shape_of(&self, key: &str) -> Option<&Schema> {
        self.shape.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    /// Add the fields of `other`; its fields replace same-named ones.
    #[must_use = "schema builders return a new schema"]
    pub fn extend(mut self, other: ObjectSchema) -> Self {
        for (key, schema) in other.shape {
            self = self.field(key, schema);
        }
        self
    }

    /// Like [`extend`](ObjectSchema::extend), but also adopts `other`'s unknown-key policy.
    #[must_use = "schema builders return a new schema"]
    pub fn merge(self, other: ObjectSchema) -> Self {
        let policy = other.unknown_keys;
        let mut merged = self.extend(other);
        merged.unknown_keys = policy;
        merged
    }

    /// Keep only the listed keys.
    #[must_use = "schema builders return a new schema"]
    pub fn pick(mut self, keys: &[&str]) -> Self {
        self.shape.retain(|(k, _)| keys.contains(&k.as_str()));
        self
    }

    /// Drop the listed keys.
    #[must_use = "schema builders return a new schema"]
    pub fn omit(mut self, keys: &[&str]) -> Self {
        self.shape.retain(|(k, _)| !keys.contains(&k.as_str()));
        self
    }

    /// Make every declared key optional.
    #[must_use = "schema builders return a new schema"]
    pub fn partial(mut self) -> Self {
        self.shape = self
            .shape
            .into_iter()
            .map(|(k, s)| (k, Optional::new(s).boxed()))
            .collect();
        self
    }

    /// Report undeclared keys as an `unrecognized_keys` issue.
    #[must_use = "schema builders return a new schema"]
    pub fn strict(mut self) -> Self {
        self.unknown_keys = Some(UnknownKeys::Strict);
        self
    }

    /// Drop undeclared keys from the output.
    #[must_use = "schema builders return a new schema"]
    pub fn strip(mut self) -> Self {
        self.unknown_keys = Some(UnknownKeys::Strip);
        self
    }

    /// Copy undeclared keys into the output.
    #[must_use = "schema builders return a new schema"]
    pub fn passthrough(mut self) -> Self {
        self.unknown_keys = Some(UnknownKeys::Passthrough);
        self
    }
}

impl ZodType for ObjectSchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let mut input = match input {
            Value::Object(map) => map,
            other => return Err(self.messages.reject(ctx, "object", &other)),
        };

        let mut output = BTreeMap::new();
        let mut aborted = false;
        for (key, schema) in &self.shape {
            if ctx.is_halted() {
                break;
            }
            let value = input.remove(key).unwrap_or(Value::Undefined);
            match ctx.nested(key.as_str(), |ctx| schema.parse_value(value, ctx)) {
                Ok(Value::Undefined) => {}
                Ok(value) => {
                    output.insert(key.clone(), value);
                }
                Err(Aborted) => aborted = true,
            }
        }

        // `input` now only holds undeclared keys
        if !input.is_empty() {
            match self.unknown_keys.unwrap_or(ctx.config().unknown_keys) {
                UnknownKeys::Strip => {
                    trace!(count = input.len(), "Stripping unknown keys");
                }
                UnknownKeys::Strict => {
                    if !ctx.is_halted() {
                        let keys: Vec<String> = input.keys().map(|k| format!("'{}'", k)).collect();
                        ctx.report(Issue::new(
                            IssueCode::UnrecognizedKeys,
                            format!("Unrecognized key(s) in object: {}", keys.join(", ")),
                        ));
                    }
                }
                UnknownKeys::Passthrough => output.extend(input),
            }
        }

        if aborted {
            Err(Aborted)
        } else {
            Ok(Value::Object(output))
        }
    }

    fn expr(&self) -> String {
        let fields: Vec<String> = self
            .shape
            .iter()
            .map(|(k, s)| format!("{}: {}", k, s.expr()))
            .collect();
        let mut expr = if fields.is_empty() {
            "z.object({})".to_string()
        } else {
            format!("z.object({{ {} }})", fields.join(", "))
        };
        match self.unknown_keys {
            Some(UnknownKeys::Strict) => expr.push_str(".strict()"),
            Some(UnknownKeys::Passthrough) => expr.push_str(".passthrough()"),
            Some(UnknownKeys::Strip) => expr.push_str(".strip()"),
            None => {}
        }
        expr
    }
}
