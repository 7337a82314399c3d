//! Schema nodes and the [`ZodType`] trait they share.
//!
//! Every node implements [`ZodType::parse_value`], which validates one value
//! at the context's current path. The provided methods build the two result
//! modes on top of it ([`ZodType::parse`] and [`ZodType::safe_parse`]) and
//! the wrapping builders (`optional`, `refine`, `transform`, ...).
//!
//! Nodes are immutable. Builder methods consume the node and return a new one;
//! wrappers hold the node they wrap. Clone a node first to derive several
//! schemas from a common base.

mod collection;
mod date;
mod effects;
mod map;
mod modifiers;
mod number;
mod object;
mod primitive;
mod string;

pub use collection::{ArraySchema, SetSchema};
pub use date::DateSchema;
pub use effects::{Refinement, Transform};
pub use map::MapSchema;
pub use modifiers::{Nullable, Optional, WithDefault};
pub use number::NumberSchema;
pub use object::ObjectSchema;
pub use primitive::BooleanSchema;
pub use string::StringSchema;

use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::context::{Aborted, ParseContext, Step};
use crate::error::{Error, ZodError};
use crate::issue::Issue;
use crate::result::ParseResult;
use crate::value::Value;

/// A schema that can validate dynamic values.
///
/// Implementors only provide [`parse_value`](ZodType::parse_value) and
/// [`expr`](ZodType::expr); everything else is provided.
///
/// # Example
///
/// ```rust
/// use zod_runtime::{z, Value, ZodType};
///
/// let schema = z::string().max(5).min(3);
/// assert_eq!(schema.parse("irda").unwrap(), Value::from("irda"));
/// assert!(schema.safe_parse("ir").is_failure());
/// ```
pub trait ZodType: fmt::Debug + Send + Sync {
    /// Validate `input` at the context's current path.
    ///
    /// Issues are reported to `ctx`. `Ok` carries the output value, which is
    /// only trustworthy if no issues were reported meanwhile.
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step;

    /// Render the schema as Zod TypeScript source, e.g. `z.string().min(3)`.
    fn expr(&self) -> String;

    /// Non-throwing parse with an explicit configuration.
    fn safe_parse_with(&self, input: Value, config: &ParseConfig) -> ParseResult {
        let mut ctx = ParseContext::new(config);
        let outcome = self.parse_value(input, &mut ctx);
        let mut issues = ctx.into_issues();
        match outcome {
            Ok(value) if issues.is_empty() => {
                trace!(schema = %self.expr(), "Parse succeeded");
                ParseResult::Success(value)
            }
            _ => {
                if issues.is_empty() {
                    issues.push(Issue::custom("Invalid input"));
                }
                let paths: Vec<_> = issues.iter().map(Issue::path_string).collect();
                debug!(
                    schema = %self.expr(),
                    issue_count = issues.len(),
                    paths = ?paths,
                    "Parse failed"
                );
                ParseResult::Failure(issues)
            }
        }
    }

    /// Non-throwing parse: always returns a [`ParseResult`].
    fn safe_parse(&self, input: impl Into<Value>) -> ParseResult
    where
        Self: Sized,
    {
        self.safe_parse_with(input.into(), &ParseConfig::default())
    }

    /// Parse and return the validated value, or every collected issue as a [`ZodError`].
    fn parse(&self, input: impl Into<Value>) -> Result<Value, ZodError>
    where
        Self: Sized,
    {
        self.safe_parse(input).into_result()
    }

    /// [`parse`](ZodType::parse) with an explicit configuration.
    fn parse_with(&self, input: impl Into<Value>, config: &ParseConfig) -> Result<Value, ZodError>
    where
        Self: Sized,
    {
        self.safe_parse_with(input.into(), config).into_result()
    }

    /// Parse, then deserialize the validated value into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when parsing fails and
    /// [`Error::Deserialize`] when the validated value does not fit `T`.
    fn parse_as<T: DeserializeOwned>(&self, input: impl Into<Value>) -> Result<T, Error>
    where
        Self: Sized,
    {
        let value = self.parse(input)?;
        Ok(serde_json::from_value(value.to_json())?)
    }

    /// Accept `undefined` (a missing object key) in addition to this schema.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Accept `null` in addition to this schema.
    fn nullable(self) -> Nullable<Self>
    where
        Self: Sized,
    {
        Nullable::new(self)
    }

    /// Replace `undefined` input with `value` before validating.
    fn with_default(self, value: impl Into<Value>) -> WithDefault<Self>
    where
        Self: Sized,
    {
        WithDefault::new(self, value.into())
    }

    /// Report a custom issue with `message` when `predicate` returns false.
    fn refine<F>(self, predicate: F, message: impl Into<String>) -> Refinement<Self>
    where
        Self: Sized,
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Refinement::new(self, "refine", move |value| {
            if predicate(value) {
                Vec::new()
            } else {
                vec![Issue::custom(message.clone())]
            }
        })
    }

    /// Run a callback that may report any number of issues, each relative to this value.
    fn super_refine<F>(self, check: F) -> Refinement<Self>
    where
        Self: Sized,
        F: Fn(&Value) -> Vec<Issue> + Send + Sync + 'static,
    {
        Refinement::new(self, "superRefine", check)
    }

    /// Map the validated value. Runs only when this schema produced no issues.
    fn transform<F>(self, f: F) -> Transform<Self>
    where
        Self: Sized,
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Transform::new(self, move |value| Ok(f(value)))
    }

    /// Map the validated value with a callback that may reject it.
    ///
    /// Returning `Err(issues)` records the issues and makes the parse fail even
    /// though the wrapped schema's own checks passed.
    fn try_transform<F>(self, f: F) -> Transform<Self>
    where
        Self: Sized,
        F: Fn(Value) -> Result<Value, Vec<Issue>> + Send + Sync + 'static,
    {
        Transform::new(self, f)
    }

    /// Erase the concrete type.
    fn boxed(self) -> Schema
    where
        Self: Sized + 'static,
    {
        Schema::new(self)
    }
}

/// A type-erased, cheaply clonable schema handle.
#[derive(Clone)]
pub struct Schema(Arc<dyn ZodType>);

impl Schema {
    /// Wrap any schema node.
    pub fn new(schema: impl ZodType + 'static) -> Self {
        Self(Arc::new(schema))
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl ZodType for Schema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        self.0.parse_value(input, ctx)
    }

    fn expr(&self) -> String {
        self.0.expr()
    }

    fn boxed(self) -> Schema {
        self
    }
}

/// A constraint plus its optional custom message.
#[derive(Debug, Clone)]
pub(crate) struct Check<K> {
    pub(crate) kind: K,
    pub(crate) message: Option<String>,
}

impl<K> Check<K> {
    pub(crate) fn new(kind: K) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Apply the custom message, if any, to a default issue.
    pub(crate) fn issue(&self, default: Issue) -> Issue {
        match &self.message {
            Some(message) => default.with_message(message.clone()),
            None => default,
        }
    }
}

/// Set the message of the most recently added check, falling back to the
/// invalid-type message when there are no checks yet.
pub(crate) fn set_last_message<K>(
    checks: &mut [Check<K>],
    messages: &mut TypeMessages,
    message: String,
) {
    match checks.last_mut() {
        Some(check) => check.message = Some(message),
        None => messages.invalid_type = Some(message),
    }
}

/// Custom messages for a missing value and for a wrong runtime type.
#[derive(Debug, Clone, Default)]
pub(crate) struct TypeMessages {
    pub(crate) required: Option<String>,
    pub(crate) invalid_type: Option<String>,
}

impl TypeMessages {
    /// Report a missing or mistyped value and abort the node.
    pub(crate) fn reject(&self, ctx: &mut ParseContext<'_>, expected: &str, received: &Value) -> Aborted {
        let issue = if received.is_undefined() {
            match &self.required {
                Some(message) => Issue::required().with_message(message.clone()),
                None => Issue::required(),
            }
        } else {
            let issue = Issue::invalid_type(expected, received.kind());
            match &self.invalid_type {
                Some(message) => issue.with_message(message.clone()),
                None => issue,
            }
        };
        ctx.report(issue);
        Aborted
    }
}

/// Builder methods shared by every base schema: custom type messages.
macro_rules! impl_type_messages {
    ($ty:ty) => {
        impl $ty {
            /// Message used when the value is missing (`undefined`).
            #[must_use = "schema builders return a new schema"]
            pub fn required_error(mut self, message: impl Into<String>) -> Self {
                self.messages.required = Some(message.into());
                self
            }

            /// Message used when the value has the wrong runtime type.
            #[must_use = "schema builders return a new schema"]
            pub fn invalid_type_error(mut self, message: impl Into<String>) -> Self {
                self.messages.invalid_type = Some(message.into());
                self
            }
        }
    };
}

pub(crate) use impl_type_messages;

/// Append `.name(args)` to an expression.
pub(crate) fn call(expr: &mut String, name: &str, args: impl fmt::Display) {
    expr.push_str(&format!(".{}({})", name, args));
}
