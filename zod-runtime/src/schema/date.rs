//! `z.date()`

use chrono::{DateTime, Utc};
use tracing::trace;

use super::{Check, TypeMessages, ZodType, call, set_last_message};
use crate::coerce;
use crate::context::{Aborted, ParseContext, Step};
use crate::issue::{Issue, IssueCode};
use crate::value::{Value, format_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateCheck {
    Min(DateTime<Utc>),
    Max(DateTime<Utc>),
}

/// Date schema.
///
/// With coercion, strings and epoch milliseconds that cannot be read as a
/// date are reported as `invalid_date` rather than as a type mismatch.
#[derive(Debug, Clone, Default)]
pub struct DateSchema {
    coerce: bool,
    checks: Vec<Check<DateCheck>>,
    messages: TypeMessages,
}

super::impl_type_messages!(DateSchema);

impl DateSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            coerce,
            ..Self::default()
        }
    }

    /// Earliest accepted date (inclusive).
    #[must_use = "schema builders return a new schema"]
    pub fn min(mut self, date: DateTime<Utc>) -> Self {
        self.checks.push(Check::new(DateCheck::Min(date)));
        self
    }

    /// Latest accepted date (inclusive).
    #[must_use = "schema builders return a new schema"]
    pub fn max(mut self, date: DateTime<Utc>) -> Self {
        self.checks.push(Check::new(DateCheck::Max(date)));
        self
    }

    /// Custom message for the most recently added check.
    #[must_use = "schema builders return a new schema"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        set_last_message(&mut self.checks, &mut self.messages, message.into());
        self
    }
}

impl ZodType for DateSchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let input = if self.coerce {
            coerce::to_date(input)
        } else {
            input
        };
        let date = match input {
            Value::Date(date) => date,
            Value::String(_) | Value::Number(_) if self.coerce => {
                ctx.report(Issue::new(IssueCode::InvalidDate, "Invalid date"));
                return Err(Aborted);
            }
            other => return Err(self.messages.reject(ctx, "date", &other)),
        };

        for check in &self.checks {
            if ctx.is_halted() {
                break;
            }
            let issue = match check.kind {
                DateCheck::Min(min) if date < min => Issue::new(
                    IssueCode::TooSmall,
                    format!("Date must be greater than or equal to {}", format_date(&min)),
                ),
                DateCheck::Max(max) if date > max => Issue::new(
                    IssueCode::TooBig,
                    format!("Date must be smaller than or equal to {}", format_date(&max)),
                ),
                _ => continue,
            };
            trace!(code = %issue.code, "Date check failed");
            ctx.report(check.issue(issue));
        }

        Ok(Value::Date(date))
    }

    fn expr(&self) -> String {
        let mut expr = if self.coerce {
            "z.coerce.date()".to_string()
        } else {
            "z.date()".to_string()
        };
        for check in &self.checks {
            match check.kind {
                DateCheck::Min(d) => call(&mut expr, "min", format!("new Date({:?})", format_date(&d))),
                DateCheck::Max(d) => call(&mut expr, "max", format!("new Date({:?})", format_date(&d))),
            }
        }
        expr
    }
}
