//! Error types.
//!
//! [`ZodError`] is the aggregate raised by [`parse`](crate::ZodType::parse):
//! it carries every issue collected during the parse, not just the first.
//! [`Error`] is the crate-level error for operations that can fail for
//! reasons other than validation.
//!
//! # Example
//! ```rust
//! use zod_runtime::{z, ZodType};
//!
//! let schema = z::string().min(3);
//! let err = schema.parse("ir").unwrap_err();
//! assert_eq!(err.issues.len(), 1);
//! assert_eq!(err.issues[0].message, "String must contain at least 3 character(s)");
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::issue::{Issue, PathSegment};

/// Aggregate validation error carrying all collected issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_issues(.issues))]
pub struct ZodError {
    /// The collected issues, in the order they were found
    pub issues: Vec<Issue>,
}

fn render_issues(issues: &[Issue]) -> String {
    let mut out = format!("{} validation issue(s)", issues.len());
    for issue in issues {
        out.push_str(&format!("\n  - [{}] {}", issue.code, issue));
    }
    out
}

/// Issues split into root-level ("form") errors and per-field errors.
///
/// Field errors are keyed by the first path segment, mirroring Zod's `flatten()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlattenedErrors {
    /// Messages of issues at the root path
    pub form_errors: Vec<String>,
    /// Messages grouped by top-level field
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ZodError {
    /// Create an error from collected issues.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Get the issues
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Split issues into form-level and top-level field errors.
    pub fn flatten(&self) -> FlattenedErrors {
        let mut flat = FlattenedErrors::default();
        for issue in &self.issues {
            match issue.path.first() {
                None => flat.form_errors.push(issue.message.clone()),
                Some(segment) => flat
                    .field_errors
                    .entry(segment.to_string())
                    .or_default()
                    .push(issue.message.clone()),
            }
        }
        flat
    }

    /// Convert to a map of full path -> issues for easier lookup
    pub fn errors_by_path(&self) -> BTreeMap<String, Vec<&Issue>> {
        let mut map: BTreeMap<String, Vec<&Issue>> = BTreeMap::new();
        for issue in &self.issues {
            map.entry(issue.path_string()).or_default().push(issue);
        }
        map
    }

    /// Issues located exactly at `path`.
    pub fn issues_at(&self, path: &[PathSegment]) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.path == path).collect()
    }
}

/// Crate-level error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] ZodError),
    /// JSON (de)serialization failed
    #[error("serialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    /// A configuration value is out of range
    #[error("invalid parse configuration: {0}")]
    Config(#[from] ConfigValidationError),
}

/// Result type alias using the crate error.
pub type Result<T, E = Error> = std::result::Result<T, E>;
