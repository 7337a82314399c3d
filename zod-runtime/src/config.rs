//! Parse configuration.
//!
//! [`ParseConfig`] tunes how a parse collects issues and how objects treat
//! keys their schema does not declare. The defaults match Zod: unknown keys
//! are stripped and every issue is collected.
//!
//! # Example
//! ```rust
//! use zod_runtime::{ParseConfig, UnknownKeys};
//!
//! let config = ParseConfig::new()
//!     .with_unknown_keys(UnknownKeys::Strict)
//!     .with_abort_early(true);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// max_issues must be greater than 0
    InvalidMaxIssues,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxIssues => write!(f, "max_issues must be greater than 0"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// How object schemas treat input keys they do not declare.
///
/// # Variants
///
/// * `Strip` - Ignore unknown keys and leave them out of the output.
///
/// * `Strict` - Report an `unrecognized_keys` issue at the object's path.
///
/// * `Passthrough` - Copy unknown keys into the output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum UnknownKeys {
    /// Drop unknown keys from the output.
    #[default]
    Strip,
    /// Reject objects carrying unknown keys.
    Strict,
    /// Keep unknown keys in the output.
    Passthrough,
}

/// Configuration for a single parse call.
///
/// # Fields
///
/// * `unknown_keys` - Default policy for undeclared object keys. Objects built
///   with `.strict()`, `.strip()` or `.passthrough()` override it. Default: `Strip`.
///
/// * `abort_early` - Stop validating as soon as the first issue is recorded.
///   Default: false.
///
/// * `max_issues` - Upper bound on collected issues. Once reached, validation
///   stops and further issues are dropped. Default: 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Default policy for undeclared object keys (default: Strip)
    pub unknown_keys: UnknownKeys,
    /// Stop after the first issue (default: false)
    pub abort_early: bool,
    /// Maximum number of collected issues (default: 100)
    pub max_issues: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            unknown_keys: UnknownKeys::default(),
            abort_early: false,
            max_issues: 100,
        }
    }
}

impl ParseConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON text and validate it.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialize`] for malformed JSON and [`Error::Config`]
    /// when the loaded values are invalid.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return an error if invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_issues` is 0.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_issues == 0 {
            return Err(ConfigValidationError::InvalidMaxIssues);
        }
        Ok(())
    }

    /// Set the default unknown-key policy.
    #[must_use = "This method returns a new ParseConfig and does not modify self"]
    pub fn with_unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Enable or disable stopping at the first issue.
    #[must_use = "This method returns a new ParseConfig and does not modify self"]
    pub fn with_abort_early(mut self, enabled: bool) -> Self {
        self.abort_early = enabled;
        self
    }

    /// Set the maximum number of collected issues.
    #[must_use = "This method returns a new ParseConfig and does not modify self"]
    pub fn with_max_issues(mut self, max: usize) -> Self {
        self.max_issues = max;
        self
    }
}
