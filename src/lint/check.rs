//! Lint check definitions.
//!
//! - [`LintCheck`] - The trait every line check implements
//! - [`Finding`] - What a check reports for a single line
//! - [`LintContext`] - State shared by checks for the duration of one run
//! - [`FnCheck`] - Adapter turning a closure into a named check

use std::collections::HashMap;

use crate::report::Severity;

/// A single line-level lint check.
///
/// Checks receive every non-blank, non-comment line of the document along
/// with its 1-based line number and report at most one finding per line.
pub trait LintCheck: Send + Sync {
    /// Unique name used for registration, directives and reporting.
    fn name(&self) -> &str;

    /// Inspect one line.
    fn run(&self, line_number: usize, line: &str, ctx: &mut LintContext) -> Option<Finding>;
}

/// A finding reported by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Human-readable message.
    pub message: String,
    /// Severity; the pipeline treats `None` as an error.
    pub severity: Option<Severity>,
}

impl Finding {
    /// Create a finding with no explicit severity.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
        }
    }

    /// Create an error finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Error)
    }

    /// Create a warning finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Warning)
    }

    /// Create a notice finding.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Notice)
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }
}

/// Per-run lint state.
///
/// A fresh context is created for every lint run, so nothing leaks between
/// documents.
#[derive(Debug, Default)]
pub struct LintContext {
    seen_keys: HashMap<String, usize>,
}

impl LintContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` is defined on `line`.
    ///
    /// Returns the line of the earlier definition when the key was already
    /// seen; the first definition stays recorded.
    pub fn record_key(&mut self, key: &str, line: usize) -> Option<usize> {
        match self.seen_keys.get(key) {
            Some(&first) => Some(first),
            None => {
                self.seen_keys.insert(key.to_string(), line);
                None
            }
        }
    }
}

/// A named check backed by a closure.
///
/// # Example
///
/// ```
/// use env_sentinel::lint::{FnCheck, Finding, LintContext, Linter};
///
/// let mut linter = Linter::with_builtins();
/// linter.register(FnCheck::new("no-todo", |_: usize, line: &str, _: &mut LintContext| {
///     line.contains("TODO").then(|| Finding::warning("Value contains TODO"))
/// }));
///
/// let report = linter.lint("API_URL=TODO");
/// assert!(report.issues.iter().any(|i| i.rule.as_deref() == Some("no-todo")));
/// ```
pub struct FnCheck<F> {
    name: String,
    run: F,
}

impl<F> FnCheck<F>
where
    F: Fn(usize, &str, &mut LintContext) -> Option<Finding> + Send + Sync,
{
    /// Create a named check from a closure.
    pub fn new(name: impl Into<String>, run: F) -> Self {
        Self {
            name: name.into(),
            run,
        }
    }
}

impl<F> LintCheck for FnCheck<F>
where
    F: Fn(usize, &str, &mut LintContext) -> Option<Finding> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, line_number: usize, line: &str, ctx: &mut LintContext) -> Option<Finding> {
        (self.run)(line_number, line, ctx)
    }
}
