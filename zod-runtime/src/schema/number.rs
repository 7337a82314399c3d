//! `z.number()`

use tracing::trace;

use super::{Check, TypeMessages, ZodType, call, set_last_message};
use crate::coerce;
use crate::context::{ParseContext, Step};
use crate::issue::{Issue, IssueCode};
use crate::value::{Value, format_number};

#[derive(Debug, Clone, Copy, PartialEq)]
enum NumberCheck {
    Min { value: f64, inclusive: bool },
    Max { value: f64, inclusive: bool },
    Int,
    MultipleOf(f64),
    Finite,
}

/// Number schema.
///
/// NaN is always rejected as a type mismatch. Infinities pass unless
/// [`finite`](NumberSchema::finite) is set.
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    coerce: bool,
    checks: Vec<Check<NumberCheck>>,
    messages: TypeMessages,
}

super::impl_type_messages!(NumberSchema);

impl NumberSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            coerce,
            ..Self::default()
        }
    }

    fn check(mut self, kind: NumberCheck) -> Self {
        self.checks.push(Check::new(kind));
        self
    }

    /// Inclusive lower bound.
    #[must_use = "schema builders return a new schema"]
    pub fn min(self, value: impl Into<f64>) -> Self {
        self.check(NumberCheck::Min { value: value.into(), inclusive: true })
    }

    /// Inclusive upper bound.
    #[must_use = "schema builders return a new schema"]
    pub fn max(self, value: impl Into<f64>) -> Self {
        self.check(NumberCheck::Max { value: value.into(), inclusive: true })
    }

    /// Exclusive lower bound.
    #[must_use = "schema builders return a new schema"]
    pub fn gt(self, value: impl Into<f64>) -> Self {
        self.check(NumberCheck::Min { value: value.into(), inclusive: false })
    }

    /// Exclusive upper bound.
    #[must_use = "schema builders return a new schema"]
    pub fn lt(self, value: impl Into<f64>) -> Self {
        self.check(NumberCheck::Max { value: value.into(), inclusive: false })
    }

    #[must_use = "schema builders return a new schema"]
    pub fn int(self) -> Self {
        self.check(NumberCheck::Int)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn positive(self) -> Self {
        self.gt(0)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn negative(self) -> Self {
        self.lt(0)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn nonnegative(self) -> Self {
        self.min(0)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn nonpositive(self) -> Self {
        self.max(0)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn multiple_of(self, step: impl Into<f64>) -> Self {
        self.check(NumberCheck::MultipleOf(step.into()))
    }

    #[must_use = "schema builders return a new schema"]
    pub fn finite(self) -> Self {
        self.check(NumberCheck::Finite)
    }

    /// Custom message for the most recently added check.
    #[must_use = "schema builders return a new schema"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        set_last_message(&mut self.checks, &mut self.messages, message.into());
        self
    }

    fn failure(kind: &NumberCheck, n: f64) -> Option<Issue> {
        match *kind {
            NumberCheck::Min { value, inclusive } => {
                let ok = if inclusive { n >= value } else { n > value };
                (!ok).then(|| Issue::too_small_number(value, inclusive))
            }
            NumberCheck::Max { value, inclusive } => {
                let ok = if inclusive { n <= value } else { n < value };
                (!ok).then(|| Issue::too_big_number(value, inclusive))
            }
            NumberCheck::Int => (!n.is_finite() || n.fract() != 0.0)
                .then(|| Issue::new(IssueCode::InvalidType, "Expected integer, received float")),
            NumberCheck::MultipleOf(step) => (!is_multiple_of(n, step)).then(|| {
                Issue::new(
                    IssueCode::NotMultipleOf,
                    format!("Number must be a multiple of {}", format_number(step)),
                )
            }),
            NumberCheck::Finite => (!n.is_finite())
                .then(|| Issue::new(IssueCode::NotFinite, "Number must be finite")),
        }
    }
}

/// Multiple-of check tolerant to binary rounding, so `0.3` is a multiple of `0.1`.
fn is_multiple_of(n: f64, step: f64) -> bool {
    if step == 0.0 || !n.is_finite() {
        return false;
    }
    let quotient = n / step;
    (quotient - quotient.round()).abs() <= 1e-9 * quotient.abs().max(1.0)
}

impl ZodType for NumberSchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let input = if self.coerce {
            coerce::to_number(input)
        } else {
            input
        };
        let n = match input {
            Value::Number(n) if !n.is_nan() => n,
            other => return Err(self.messages.reject(ctx, "number", &other)),
        };

        for check in &self.checks {
            if ctx.is_halted() {
                break;
            }
            if let Some(issue) = Self::failure(&check.kind, n) {
                trace!(code = %issue.code, value = n, "Number check failed");
                ctx.report(check.issue(issue));
            }
        }

        Ok(Value::Number(n))
    }

    fn expr(&self) -> String {
        let mut expr = if self.coerce {
            "z.coerce.number()".to_string()
        } else {
            "z.number()".to_string()
        };
        for check in &self.checks {
            match check.kind {
                NumberCheck::Min { value, inclusive: true } => call(&mut expr, "min", format_number(value)),
                NumberCheck::Min { value, inclusive: false } => call(&mut expr, "gt", format_number(value)),
                NumberCheck::Max { value, inclusive: true } => call(&mut expr, "max", format_number(value)),
                NumberCheck::Max { value, inclusive: false } => call(&mut expr, "lt", format_number(value)),
                NumberCheck::Int => call(&mut expr, "int", ""),
                NumberCheck::MultipleOf(step) => call(&mut expr, "multipleOf", format_number(step)),
                NumberCheck::Finite => call(&mut expr, "finite", ""),
            }
        }
        expr
    }
}
