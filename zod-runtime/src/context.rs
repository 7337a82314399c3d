//! Per-parse state.
//!
//! A [`ParseContext`] is created fresh for every parse call. It tracks the
//! path of the value currently being validated and collects issues, so schema
//! nodes themselves stay immutable and shareable across threads.

use tracing::trace;

use crate::config::ParseConfig;
use crate::issue::{Issue, PathSegment};
use crate::value::Value;

/// Marker returned by a node that could not produce a value at all,
/// e.g. after a type mismatch or a failed transform.
///
/// The issues explaining why are already recorded in the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Outcome of validating one node.
///
/// `Ok` carries the (possibly coerced or transformed) value. The value may
/// still be "dirty": constraint failures are recorded as issues while the
/// value keeps flowing so siblings and refinements can be evaluated.
pub type Step = Result<Value, Aborted>;

/// Mutable state threaded through a single parse.
#[derive(Debug)]
pub struct ParseContext<'a> {
    config: &'a ParseConfig,
    path: Vec<PathSegment>,
    issues: Vec<Issue>,
    reported: usize,
}

impl<'a> ParseContext<'a> {
    /// Create a context positioned at the root path.
    pub fn new(config: &'a ParseConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            issues: Vec::new(),
            reported: 0,
        }
    }

    /// The configuration for this parse.
    pub fn config(&self) -> &ParseConfig {
        self.config
    }

    /// Path of the value currently being validated.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Record an issue at the current path.
    ///
    /// The issue's own path is appended to the current path, so callbacks can
    /// point at children of the value they inspect.
    pub fn report(&mut self, mut issue: Issue) {
        self.reported += 1;
        if self.issues.len() >= self.max_issues() {
            trace!(code = %issue.code, "Issue limit reached, dropping issue");
            return;
        }
        if !self.path.is_empty() {
            let mut path = self.path.clone();
            path.append(&mut issue.path);
            issue.path = path;
        }
        trace!(code = %issue.code, path = %issue.path_string(), message = %issue.message, "Issue recorded");
        self.issues.push(issue);
    }

    /// Number of issues reported so far, including any dropped by the issue limit.
    ///
    /// Nodes compare this before and after validating a child to tell whether
    /// the child came back clean.
    pub fn reported(&self) -> usize {
        self.reported
    }

    /// Whether validation should stop collecting further issues.
    pub fn is_halted(&self) -> bool {
        (self.config.abort_early && self.reported > 0) || self.issues.len() >= self.max_issues()
    }

    /// Run `f` with `segment` pushed onto the path.
    pub fn nested<T>(&mut self, segment: impl Into<PathSegment>, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.into());
        let out = f(self);
        self.path.pop();
        out
    }

    pub(crate) fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    fn max_issues(&self) -> usize {
        self.config.max_issues.max(1)
    }
}
