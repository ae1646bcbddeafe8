//! Lint pipeline.
//!
//! The [`Linter`] owns a two-tier check registry: the built-in checks form
//! the core tier and [`Linter::register`] adds to or overrides them. Each
//! call to [`Linter::lint`] runs every effective check against every
//! non-blank, non-comment line with a fresh [`LintContext`].

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::check::{LintCheck, LintContext};
use super::checks::builtin_checks;
use super::directives::{is_blank_or_comment, DisableDirectives};
use crate::parser::split_lines;
use crate::registry::Registry;
use crate::report::{Issue, Report, Severity};

/// Runs lint checks over env documents.
#[derive(Clone, Default)]
pub struct Linter {
    checks: Registry<Arc<dyn LintCheck>>,
    disabled: HashSet<String>,
}

impl Linter {
    /// Create a linter with no checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a linter with every built-in check.
    pub fn with_builtins() -> Self {
        let core = builtin_checks()
            .into_iter()
            .map(|check| (check.name().to_string(), check));
        Self {
            checks: Registry::new(core),
            disabled: HashSet::new(),
        }
    }

    /// Register a custom check.
    ///
    /// A check with the same name as a built-in one replaces it.
    pub fn register(&mut self, check: impl LintCheck + 'static) {
        let name = check.name().to_string();
        self.checks.register(name, Arc::new(check));
    }

    /// Turn a check off for every line.
    pub fn disable(&mut self, name: impl Into<String>) {
        self.disabled.insert(name.into());
    }

    /// Names of the checks that will run, in order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks
            .names()
            .into_iter()
            .filter(|name| !self.disabled.contains(*name))
            .collect()
    }

    /// Lint an env document.
    pub fn lint(&self, content: &str) -> Report {
        let lines: Vec<&str> = split_lines(content).collect();
        let directives = DisableDirectives::parse(&lines);
        let checks: Vec<(&str, &Arc<dyn LintCheck>)> = self
            .checks
            .effective()
            .filter(|(name, _)| !self.disabled.contains(*name))
            .collect();

        let mut ctx = LintContext::new();
        let mut issues = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if is_blank_or_comment(line) {
                continue;
            }
            let line_number = index + 1;

            for (name, check) in &checks {
                if directives.is_disabled(name, line_number) {
                    continue;
                }
                if let Some(finding) = check.run(line_number, line, &mut ctx) {
                    issues.push(
                        Issue::new(finding.severity.unwrap_or(Severity::Error), finding.message)
                            .with_line(line_number)
                            .with_rule(*name),
                    );
                }
            }
        }

        let report = Report::from_issues(issues);
        debug!(
            lines = lines.len(),
            checks = checks.len(),
            errors = report.summary.errors,
            warnings = report.summary.warnings,
            notices = report.summary.notices,
            "Linted env document"
        );
        report
    }
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter")
            .field("checks", &self.checks.names())
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Lint an env document with the built-in checks.
///
/// # Example
///
/// ```
/// use env_sentinel::lint::lint;
///
/// let report = lint("DB_HOST=localhost\nDB_HOST=remote");
/// assert!(!report.is_valid);
/// assert_eq!(report.issues[0].rule.as_deref(), Some("no-duplicate-key"));
/// ```
pub fn lint(content: &str) -> Report {
    Linter::with_builtins().lint(content)
}
