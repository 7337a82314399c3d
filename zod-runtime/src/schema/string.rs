//! `z.string()`

use regex::Regex;
use tracing::trace;

use super::{Check, TypeMessages, ZodType, call, set_last_message};
use crate::coerce;
use crate::context::{ParseContext, Step};
use crate::formats;
use crate::issue::{Issue, IssueCode};
use crate::value::Value;

#[derive(Debug, Clone)]
enum StringCheck {
    Min(usize),
    Max(usize),
    Length(usize),
    Email,
    Url,
    Uuid,
    Datetime,
    Regex(Regex),
    StartsWith(String),
    EndsWith(String),
    Includes(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Normalize {
    Trim,
    ToLowerCase,
    ToUpperCase,
}

/// String schema.
///
/// Lengths count Unicode scalar values. Normalisers (`trim`, `to_lowercase`,
/// `to_uppercase`) run in declared order before any check.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    coerce: bool,
    normalizers: Vec<Normalize>,
    checks: Vec<Check<StringCheck>>,
    messages: TypeMessages,
}

super::impl_type_messages!(StringSchema);

impl StringSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            coerce,
            ..Self::default()
        }
    }

    fn check(mut self, kind: StringCheck) -> Self {
        self.checks.push(Check::new(kind));
        self
    }

    fn normalize(mut self, step: Normalize) -> Self {
        self.normalizers.push(step);
        self
    }

    /// Minimum length (inclusive).
    #[must_use = "schema builders return a new schema"]
    pub fn min(self, len: usize) -> Self {
        self.check(StringCheck::Min(len))
    }

    /// Maximum length (inclusive).
    #[must_use = "schema builders return a new schema"]
    pub fn max(self, len: usize) -> Self {
        self.check(StringCheck::Max(len))
    }

    /// Exact length.
    #[must_use = "schema builders return a new schema"]
    pub fn length(self, len: usize) -> Self {
        self.check(StringCheck::Length(len))
    }

    /// Shorthand for `min(1)`.
    #[must_use = "schema builders return a new schema"]
    pub fn nonempty(self) -> Self {
        self.min(1)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn email(self) -> Self {
        self.check(StringCheck::Email)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn url(self) -> Self {
        self.check(StringCheck::Url)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn uuid(self) -> Self {
        self.check(StringCheck::Uuid)
    }

    /// RFC 3339 date-time.
    #[must_use = "schema builders return a new schema"]
    pub fn datetime(self) -> Self {
        self.check(StringCheck::Datetime)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn regex(self, pattern: Regex) -> Self {
        self.check(StringCheck::Regex(pattern))
    }

    #[must_use = "schema builders return a new schema"]
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.check(StringCheck::StartsWith(prefix.into()))
    }

    #[must_use = "schema builders return a new schema"]
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.check(StringCheck::EndsWith(suffix.into()))
    }

    #[must_use = "schema builders return a new schema"]
    pub fn includes(self, needle: impl Into<String>) -> Self {
        self.check(StringCheck::Includes(needle.into()))
    }

    #[must_use = "schema builders return a new schema"]
    pub fn trim(self) -> Self {
        self.normalize(Normalize::Trim)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn to_lowercase(self) -> Self {
        self.normalize(Normalize::ToLowerCase)
    }

    #[must_use = "schema builders return a new schema"]
    pub fn to_uppercase(self) -> Self {
        self.normalize(Normalize::ToUpperCase)
    }

    /// Custom message for the most recently added check.
    #[must_use = "schema builders return a new schema"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        set_last_message(&mut self.checks, &mut self.messages, message.into());
        self
    }

    fn failure(kind: &StringCheck, text: &str) -> Option<Issue> {
        let len = text.chars().count();
        match kind {
            StringCheck::Min(min) if len < *min => {
                Some(Issue::too_small_len("String", "character", *min, false))
            }
            StringCheck::Max(max) if len > *max => {
                Some(Issue::too_big_len("String", "character", *max, false))
            }
            StringCheck::Length(exact) if len < *exact => {
                Some(Issue::too_small_len("String", "character", *exact, true))
            }
            StringCheck::Length(exact) if len > *exact => {
                Some(Issue::too_big_len("String", "character", *exact, true))
            }
            StringCheck::Email if !formats::is_email(text) => Some(Issue::invalid_string("email")),
            StringCheck::Url if !formats::is_url(text) => Some(Issue::invalid_string("url")),
            StringCheck::Uuid if !formats::is_uuid(text) => Some(Issue::invalid_string("uuid")),
            StringCheck::Datetime if !formats::is_datetime(text) => {
                Some(Issue::invalid_string("datetime"))
            }
            StringCheck::Regex(re) if !re.is_match(text) => {
                Some(Issue::new(IssueCode::InvalidString, "Invalid"))
            }
            StringCheck::StartsWith(prefix) if !text.starts_with(prefix.as_str()) => Some(Issue::new(
                IssueCode::InvalidString,
                format!("Invalid input: must start with \"{}\"", prefix),
            )),
            StringCheck::EndsWith(suffix) if !text.ends_with(suffix.as_str()) => Some(Issue::new(
                IssueCode::InvalidString,
                format!("Invalid input: must end with \"{}\"", suffix),
            )),
            StringCheck::Includes(needle) if !text.contains(needle.as_str()) => Some(Issue::new(
                IssueCode::InvalidString,
                format!("Invalid input: must include \"{}\"", needle),
            )),
            _ => None,
        }
    }
}

impl ZodType for StringSchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let input = if self.coerce {
            coerce::to_string(input)
        } else {
            input
        };
        let mut text = match input {
            Value::String(text) => text,
            other => return Err(self.messages.reject(ctx, "string", &other)),
        };

        for step in &self.normalizers {
            text = match step {
                Normalize::Trim => text.trim().to_string(),
                Normalize::ToLowerCase => text.to_lowercase(),
                Normalize::ToUpperCase => text.to_uppercase(),
            };
        }

        for check in &self.checks {
            if ctx.is_halted() {
                break;
            }
            if let Some(issue) = Self::failure(&check.kind, &text) {
                trace!(code = %issue.code, "String check failed");
                ctx.report(check.issue(issue));
            }
        }

        Ok(Value::String(text))
    }

    fn expr(&self) -> String {
        let mut expr = if self.coerce {
            "z.coerce.string()".to_string()
        } else {
            "z.string()".to_string()
        };
        for step in &self.normalizers {
            let name = match step {
                Normalize::Trim => "trim",
                Normalize::ToLowerCase => "toLowerCase",
                Normalize::ToUpperCase => "toUpperCase",
            };
            call(&mut expr, name, "");
        }
        for check in &self.checks {
            match &check.kind {
                StringCheck::Min(n) => call(&mut expr, "min", n),
                StringCheck::Max(n) => call(&mut expr, "max", n),
                StringCheck::Length(n) => call(&mut expr, "length", n),
                StringCheck::Email => call(&mut expr, "email", ""),
                StringCheck::Url => call(&mut expr, "url", ""),
                StringCheck::Uuid => call(&mut expr, "uuid", ""),
                StringCheck::Datetime => call(&mut expr, "datetime", ""),
                StringCheck::Regex(re) => call(&mut expr, "regex", format!("/{}/", re.as_str())),
                StringCheck::StartsWith(s) => call(&mut expr, "startsWith", format!("{:?}", s)),
                StringCheck::EndsWith(s) => call(&mut expr, "endsWith", format!("{:?}", s)),
                StringCheck::Includes(s) => call(&mut expr, "includes", format!("{:?}", s)),
            }
        }
        expr
    }
}
