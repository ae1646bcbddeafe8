//! Findings produced by the lint and validation pipelines.
//!
//! Both pipelines return a [`Report`]: an ordered list of [`Issue`]s plus a
//! [`Summary`] tally by [`Severity`]. A report is valid when it holds no
//! error-severity issue; warnings and notices never invalidate it.

use serde::Serialize;

/// Severity level for an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic finding, lowest priority.
    Notice,
    /// Informational finding that does not block.
    Warning,
    /// Finding that makes the report invalid.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Notice => write!(f, "notice"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One diagnostic finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// 1-based line number, when the finding maps to a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Variable name the finding concerns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Name of the check or validator that raised it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Offending value, when relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Issue {
    /// Create a new issue.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line: None,
            key: None,
            message: message.into(),
            severity,
            rule: None,
            value: None,
        }
    }

    /// Create an error-severity issue.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning-severity issue.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a notice-severity issue.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(Severity::Notice, message)
    }

    /// Attach a line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach the variable name.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach the originating rule name.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Attach the offending value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Issue counts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub notices: usize,
}

impl Summary {
    /// Tally the given issues.
    pub fn tally(issues: &[Issue]) -> Self {
        let mut summary = Self::default();
        for issue in issues {
            summary.record(issue.severity);
        }
        summary
    }

    fn record(&mut self, severity: Severity) {
        self.total += 1;
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Notice => self.notices += 1,
        }
    }
}

/// Outcome of a lint or validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// True iff there are no error-severity issues.
    pub is_valid: bool,
    /// Issues in the order they were found.
    pub issues: Vec<Issue>,
    /// Counts by severity.
    pub summary: Summary,
}

impl Report {
    /// Build a report from collected issues.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let summary = Summary::tally(&issues);
        Self {
            is_valid: summary.errors == 0,
            issues,
            summary,
        }
    }

    /// Whether any warning-severity issue is present.
    pub fn has_warnings(&self) -> bool {
        self.summary.warnings > 0
    }

    /// Line numbers that carry at least one error-severity issue.
    pub fn error_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .filter_map(|issue| issue.line)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::from_issues(Vec::new())
    }
}
