//! Validation issues.
//!
//! An [`Issue`] records a single failure: where it happened (a path of object
//! keys and collection indices), what kind of failure it was ([`IssueCode`]),
//! and a human-readable message.
//!
//! # Example
//! ```rust
//! use zod_runtime::{Issue, IssueCode};
//!
//! let issue = Issue::custom("Passwords do not match").at("confirm");
//! assert_eq!(issue.code, IssueCode::Custom);
//! assert_eq!(issue.to_string(), "confirm: Passwords do not match");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::{ValueKind, format_number};

/// Type-safe issue codes.
///
/// When serialized, codes use Zod's snake_case names
/// (e.g., `TooSmall` becomes `"too_small"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueCode {
    // Type mismatch
    /// The value has the wrong runtime type, or a required value is missing
    InvalidType,

    // Range violations
    /// A length, size, or numeric lower bound was violated
    TooSmall,
    /// A length, size, or numeric upper bound was violated
    TooBig,
    /// A number is not a multiple of the configured step
    NotMultipleOf,
    /// A number is infinite where a finite one was required
    NotFinite,

    // Format violations
    /// A string failed a format check (email, url, uuid, regex, ...)
    InvalidString,
    /// A value could not be interpreted as a date
    InvalidDate,

    // Structural
    /// An object carried keys its schema does not declare (strict mode)
    UnrecognizedKeys,

    // Callbacks
    /// Raised by a refinement or transform callback
    Custom,
}

impl IssueCode {
    /// Returns the string representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::TooSmall => "too_small",
            Self::TooBig => "too_big",
            Self::NotMultipleOf => "not_multiple_of",
            Self::NotFinite => "not_finite",
            Self::InvalidString => "invalid_string",
            Self::InvalidDate => "invalid_date",
            Self::UnrecognizedKeys => "unrecognized_keys",
            Self::Custom => "custom",
        }
    }

    /// Returns true if this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::InvalidType)
    }

    /// Returns true if this is a range violation (min/max and friends).
    pub fn is_range_violation(&self) -> bool {
        matches!(
            self,
            Self::TooSmall | Self::TooBig | Self::NotMultipleOf | Self::NotFinite
        )
    }

    /// Returns true if this is a format violation.
    pub fn is_format_violation(&self) -> bool {
        matches!(self, Self::InvalidString | Self::InvalidDate)
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of an issue path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// An object key, or the display form of a map key
    Key(String),
    /// An array or set position
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// What kind of failure this is
    pub code: IssueCode,
    /// Location of the failing value, outermost segment first
    pub path: Vec<PathSegment>,
    /// Human-readable error message
    pub message: String,
}

impl Issue {
    /// Create an issue at the root path.
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Create a custom issue, as raised from refinements and transforms.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(IssueCode::Custom, message)
    }

    /// Create a "Required" issue for a missing value.
    pub fn required() -> Self {
        Self::new(IssueCode::InvalidType, "Required")
    }

    /// Create a type mismatch issue.
    pub fn invalid_type(expected: &str, received: ValueKind) -> Self {
        Self::new(
            IssueCode::InvalidType,
            format!("Expected {}, received {}", expected, received),
        )
    }

    /// Create an "invalid_string" issue for a failed format check.
    pub fn invalid_string(validation: &str) -> Self {
        Self::new(IssueCode::InvalidString, format!("Invalid {}", validation))
    }

    /// Create a "too_small" issue for a length or size bound.
    pub fn too_small_len(noun: &str, unit: &str, min: usize, exact: bool) -> Self {
        let bound = if exact { "exactly" } else { "at least" };
        Self::new(
            IssueCode::TooSmall,
            format!("{} must contain {} {} {}(s)", noun, bound, min, unit),
        )
    }

    /// Create a "too_big" issue for a length or size bound.
    pub fn too_big_len(noun: &str, unit: &str, max: usize, exact: bool) -> Self {
        let bound = if exact { "exactly" } else { "at most" };
        Self::new(
            IssueCode::TooBig,
            format!("{} must contain {} {} {}(s)", noun, bound, max, unit),
        )
    }

    /// Create a "too_small" issue for a numeric lower bound.
    pub fn too_small_number(min: f64, inclusive: bool) -> Self {
        let relation = if inclusive {
            "greater than or equal to"
        } else {
            "greater than"
        };
        Self::new(
            IssueCode::TooSmall,
            format!("Number must be {} {}", relation, format_number(min)),
        )
    }

    /// Create a "too_big" issue for a numeric upper bound.
    pub fn too_big_number(max: f64, inclusive: bool) -> Self {
        let relation = if inclusive {
            "less than or equal to"
        } else {
            "less than"
        };
        Self::new(
            IssueCode::TooBig,
            format!("Number must be {} {}", relation, format_number(max)),
        )
    }

    /// Prepend a segment to the path.
    ///
    /// Called by callbacks to point an issue at a child of the value they inspect;
    /// the engine prefixes the location of the value itself.
    #[must_use = "This method returns a new Issue and does not modify self"]
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Replace the path.
    #[must_use = "This method returns a new Issue and does not modify self"]
    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    /// Replace the message.
    #[must_use = "This method returns a new Issue and does not modify self"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The path rendered as dot-separated segments; empty at the root.
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path_string(), self.message)
        }
    }
}
