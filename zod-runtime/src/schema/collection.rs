//! `z.array(..)` and `z.set(..)`

use tracing::trace;

use super::{Check, Schema, TypeMessages, ZodType, call, set_last_message};
use crate::context::{Aborted, ParseContext, Step};
use crate::issue::Issue;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeCheck {
    Min(usize),
    Max(usize),
    Exact(usize),
}

impl SizeCheck {
    fn failure(&self, noun: &str, len: usize) -> Option<Issue> {
        match *self {
            SizeCheck::Min(min) if len < min => Some(Issue::too_small_len(noun, "element", min, false)),
            SizeCheck::Max(max) if len > max => Some(Issue::too_big_len(noun, "element", max, false)),
            SizeCheck::Exact(n) if len < n => Some(Issue::too_small_len(noun, "element", n, true)),
            SizeCheck::Exact(n) if len > n => Some(Issue::too_big_len(noun, "element", n, true)),
            _ => None,
        }
    }

    fn render(&self, expr: &mut String, exact_name: &str) {
        match *self {
            SizeCheck::Min(n) => call(expr, "min", n),
            SizeCheck::Max(n) => call(expr, "max", n),
            SizeCheck::Exact(n) => call(expr, exact_name, n),
        }
    }
}

/// Validate every member, appending its index to the path, then apply size checks.
fn parse_members(
    element: &Schema,
    members: Vec<Value>,
    checks: &[Check<SizeCheck>],
    noun: &str,
    ctx: &mut ParseContext<'_>,
) -> Result<Vec<Value>, Aborted> {
    let len = members.len();
    let mut output = Vec::with_capacity(len);
    let mut aborted = false;
    for (index, member) in members.into_iter().enumerate() {
        if ctx.is_halted() {
            break;
        }
        match ctx.nested(index, |ctx| element.parse_value(member, ctx)) {
            Ok(value) => output.push(value),
            Err(Aborted) => aborted = true,
        }
    }

    for check in checks {
        if ctx.is_halted() {
            break;
        }
        if let Some(issue) = check.kind.failure(noun, len) {
            trace!(code = %issue.code, len = len, "{} size check failed", noun);
            ctx.report(check.issue(issue));
        }
    }

    if aborted { Err(Aborted) } else { Ok(output) }
}

/// Array schema.
#[derive(Debug, Clone)]
pub struct ArraySchema {
    element: Schema,
    checks: Vec<Check<SizeCheck>>,
    messages: TypeMessages,
}

super::impl_type_messages!(ArraySchema);

impl ArraySchema {
    pub(crate) fn new(element: Schema) -> Self {
        Self {
            element,
            checks: Vec::new(),
            messages: TypeMessages::default(),
        }
    }

    /// The member schema.
    pub fn element(&self) -> &Schema {
        &self.element
    }

    #[must_use = "schema builders return a new schema"]
    pub fn min(mut self, len: usize) -> Self {
        self.checks.push(Check::new(SizeCheck::Min(len)));
        self
    }

    #[must_use = "schema builders return a new schema"]
    pub fn max(mut self, len: usize) -> Self {
        self.checks.push(Check::new(SizeCheck::Max(len)));
        self
    }

    #[must_use = "schema builders return a new schema"]
    pub fn length(mut self, len: usize) -> Self {
        self.checks.push(Check::new(SizeCheck::Exact(len)));
        self
    }

    #[must_use = "schema builders return a new schema"]
    pub fn nonempty(self) -> Self {
        self.min(1)
    }

    /// Custom message for the most recently added check.
    #[must_use = "schema builders return a new schema"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        set_last_message(&mut self.checks, &mut self.messages, message.into());
        self
    }
}

impl ZodType for ArraySchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let members = match input {
            Value::Array(members) => members,
            other => return Err(self.messages.reject(ctx, "array", &other)),
        };
        parse_members(&self.element, members, &self.checks, "Array", ctx).map(Value::Array)
    }

    fn expr(&self) -> String {
        let mut expr = format!("z.array({})", self.element.expr());
        for check in &self.checks {
            check.kind.render(&mut expr, "length");
        }
        expr
    }
}

/// Set schema. Members that become equal after validation collapse into one.
#[derive(Debug, Clone)]
pub struct SetSchema {
    element: Schema,
    checks: Vec<Check<SizeCheck>>,
    messages: TypeMessages,
}

super::impl_type_messages!(SetSchema);

impl SetSchema {
    pub(crate) fn new(element: Schema) -> Self {
        Self {
            element,
            checks: Vec::new(),
            messages: TypeMessages::default(),
        }
    }

    #[must_use = "schema builders return a new schema"]
    pub fn min(mut self, size: usize) -> Self {
        self.checks.push(Check::new(SizeCheck::Min(size)));
        self
    }

    #[must_use = "schema builders return a new schema"]
    pub fn max(mut self, size: usize) -> Self {
        self.checks.push(Check::new(SizeCheck::Max(size)));
        self
    }

    #[must_use = "schema builders return a new schema"]
    pub fn size(mut self, size: usize) -> Self {
        self.checks.push(Check::new(SizeCheck::Exact(size)));
        self
    }

    #[must_use = "schema builders return a new schema"]
    pub fn nonempty(self) -> Self {
        self.min(1)
    }

    /// Custom message for the most recently added check.
    #[must_use = "schema builders return a new schema"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        set_last_message(&mut self.checks, &mut self.messages, message.into());
        self
    }
}

impl ZodType for SetSchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let members = match input {
            Value::Set(members) => members,
            other => return Err(self.messages.reject(ctx, "set", &other)),
        };
        parse_members(&self.element, members, &self.checks, "Set", ctx).map(Value::set)
    }

    fn expr(&self) -> String {
        let mut expr = format!("z.set({})", self.element.expr());
        for check in &self.checks {
            check.kind.render(&mut expr, "size");
        }
        expr
    }
}
