//! Human-readable output formatter.
//!
//! Each issue becomes one line:
//!
//! ```text
//! .env:3 [error] no-unsafe-key → Variable "PATH" is discouraged due to potential security or system conflicts
//! ```

use std::io::Write;

use console::Style;

use super::ReportFormatter;
use crate::report::{Issue, Report, Severity, Summary};

/// Formats reports for terminal display with optional color support.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn style(&self, severity: Severity) -> Style {
        let style = match severity {
            Severity::Error => Style::new().red(),
            Severity::Warning => Style::new().yellow(),
            Severity::Notice => Style::new().cyan(),
        };
        style.force_styling(self.use_color)
    }
}

/// Render one issue as `SOURCE[:LINE] [SEVERITY] RULE → MESSAGE`.
///
/// The key is prefixed to the message when the message does not already
/// mention it, and the offending value is appended when present.
pub fn format_issue(issue: &Issue, source: &str) -> String {
    let location = match issue.line {
        Some(line) => format!("{source}:{line}"),
        None => source.to_string(),
    };
    let rule = issue.rule.as_deref().unwrap_or("unknown");

    let mut message = match &issue.key {
        Some(key) if !issue.message.contains(key.as_str()) => {
            format!("{key}: {}", issue.message)
        }
        _ => issue.message.clone(),
    };
    if let Some(value) = &issue.value {
        message.push_str(&format!(" (value: {value})"));
    }

    format!("{location} [{}] {rule} → {message}", issue.severity)
}

/// Render non-zero counts, e.g. `2 errors, 1 warning`.
pub fn format_summary(summary: &Summary) -> String {
    let plural = |n: usize, word: &str| {
        if n == 1 {
            format!("{n} {word}")
        } else {
            format!("{n} {word}s")
        }
    };

    let mut parts = Vec::new();
    if summary.errors > 0 {
        parts.push(plural(summary.errors, "error"));
    }
    if summary.warnings > 0 {
        parts.push(plural(summary.warnings, "warning"));
    }
    if summary.notices > 0 {
        parts.push(plural(summary.notices, "notice"));
    }
    parts.join(", ")
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        report: &Report,
        source: &str,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for issue in &report.issues {
            let line = format_issue(issue, source);
            writeln!(writer, "{}", self.style(issue.severity).apply_to(line))?;
        }

        if !report.issues.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{source}: {}", format_summary(&report.summary))?;
        }

        Ok(())
    }
}
