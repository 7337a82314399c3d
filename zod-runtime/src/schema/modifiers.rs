//! `.optional()`, `.nullable()` and `.default(..)`

use super::ZodType;
use crate::context::{ParseContext, Step};
use crate::value::Value;

/// Accepts `undefined` in addition to the wrapped schema.
#[derive(Debug, Clone)]
pub struct Optional<S> {
    inner: S,
}

impl<S: ZodType> Optional<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ZodType> ZodType for Optional<S> {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        match input {
            Value::Undefined => Ok(Value::Undefined),
            other => self.inner.parse_value(other, ctx),
        }
    }

    fn expr(&self) -> String {
        format!("{}.optional()", self.inner.expr())
    }
}

/// Accepts `null` in addition to the wrapped schema.
#[derive(Debug, Clone)]
pub struct Nullable<S> {
    inner: S,
}

impl<S: ZodType> Nullable<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ZodType> ZodType for Nullable<S> {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        match input {
            Value::Null => Ok(Value::Null),
            other => self.inner.parse_value(other, ctx),
        }
    }

    fn expr(&self) -> String {
        format!("{}.nullable()", self.inner.expr())
    }
}

/// Substitutes a default for `undefined`, then validates with the wrapped schema.
#[derive(Debug, Clone)]
pub struct WithDefault<S> {
    inner: S,
    default: Value,
}

impl<S: ZodType> WithDefault<S> {
    pub(crate) fn new(inner: S, default: Value) -> Self {
        Self { inner, default }
    }
}

impl<S: ZodType> ZodType for WithDefault<S> {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let input = match input {
            Value::Undefined => self.default.clone(),
            other => other,
        };
        self.inner.parse_value(input, ctx)
    }

    fn expr(&self) -> String {
        format!("{}.default({})", self.inner.expr(), self.default.to_json())
    }
}
