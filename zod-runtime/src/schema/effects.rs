//! Refinements and transforms.
//!
//! Both wrap a schema node and run a callback on its output. A refinement
//! adds issues but never changes the value; a transform replaces the value
//! and can reject it by returning issues instead.

use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::ZodType;
use crate::context::{Aborted, ParseContext, Step};
use crate::issue::Issue;
use crate::value::Value;

type CheckFn = Arc<dyn Fn(&Value) -> Vec<Issue> + Send + Sync>;
type TransformFn = Arc<dyn Fn(Value) -> Result<Value, Vec<Issue>> + Send + Sync>;

/// Runs a callback that may report issues about the validated value.
///
/// The callback runs even when the wrapped schema reported constraint
/// failures, but not after it aborted (e.g. on a type mismatch).
#[derive(Clone)]
pub struct Refinement<S> {
    inner: S,
    name: &'static str,
    check: CheckFn,
}

impl<S: ZodType> Refinement<S> {
    pub(crate) fn new<F>(inner: S, name: &'static str, check: F) -> Self
    where
        F: Fn(&Value) -> Vec<Issue> + Send + Sync + 'static,
    {
        Self {
            inner,
            name,
            check: Arc::new(check),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Refinement<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refinement")
            .field("inner", &self.inner)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<S: ZodType> ZodType for Refinement<S> {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let value = self.inner.parse_value(input, ctx)?;
        if ctx.is_halted() {
            return Ok(value);
        }
        for issue in (self.check)(&value) {
            trace!(refinement = self.name, message = %issue.message, "Refinement reported issue");
            ctx.report(issue);
        }
        Ok(value)
    }

    fn expr(&self) -> String {
        format!("{}.{}(..)", self.inner.expr(), self.name)
    }
}

/// Replaces the validated value with the callback's result.
///
/// The callback only runs when the wrapped schema produced no issues. If it
/// returns `Err`, its issues are recorded and the node aborts.
#[derive(Clone)]
pub struct Transform<S> {
    inner: S,
    f: TransformFn,
}

impl<S: ZodType> Transform<S> {
    pub(crate) fn new<F>(inner: S, f: F) -> Self
    where
        F: Fn(Value) -> Result<Value, Vec<Issue>> + Send + Sync + 'static,
    {
        Self {
            inner,
            f: Arc::new(f),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Transform<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S: ZodType> ZodType for Transform<S> {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let before = ctx.reported();
        let value = self.inner.parse_value(input, ctx)?;
        if ctx.reported() > before {
            return Ok(value);
        }
        match (self.f)(value) {
            Ok(value) => Ok(value),
            Err(issues) => {
                trace!(issue_count = issues.len(), "Transform rejected value");
                if issues.is_empty() {
                    ctx.report(Issue::custom("Invalid input"));
                }
                for issue in issues {
                    ctx.report(issue);
                }
                Err(Aborted)
            }
        }
    }

    fn expr(&self) -> String {
        format!("{}.transform(..)", self.inner.expr())
    }
}
