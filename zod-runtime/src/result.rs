//! Result of a non-throwing parse.

use crate::error::ZodError;
use crate::issue::Issue;
use crate::value::Value;

/// Outcome of [`safe_parse`](crate::ZodType::safe_parse).
///
/// A `Failure` always carries at least one issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// The validated, possibly coerced and transformed, value
    Success(Value),
    /// Every issue collected during the parse
    Failure(Vec<Issue>),
}

impl ParseResult {
    /// Check if the parse succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if the parse failed
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The validated value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The collected issues; empty on success
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(issues) => issues,
        }
    }

    /// Convert into the throwing form.
    pub fn into_result(self) -> Result<Value, ZodError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(issues) => Err(ZodError::new(issues)),
        }
    }
}

impl From<ParseResult> for Result<Value, ZodError> {
    fn from(result: ParseResult) -> Self {
        result.into_result()
    }
}
