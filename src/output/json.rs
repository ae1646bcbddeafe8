//! JSON output formatter.
//!
//! Formats reports as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::report::Report;

/// Formats reports as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    file: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        report: &Report,
        source: &str,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            file: source,
            report,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Issue;

    fn render(report: &Report) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(report, ".env", &mut output)
            .unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn includes_file_report_and_summary() {
        let report = Report::from_issues(vec![Issue::warning("Variable \"A\" has an empty value")
            .with_line(2)
            .with_rule("no-empty-value")]);
        let json = render(&report);

        assert_eq!(json["file"], ".env");
        assert_eq!(json["isValid"], true);
        assert_eq!(json["issues"][0]["line"], 2);
        assert_eq!(json["issues"][0]["severity"], "warning");
        assert_eq!(json["summary"]["total"], 1);
    }

    #[test]
    fn empty_report_has_empty_issue_list() {
        let json = render(&Report::default());
        assert_eq!(json["issues"].as_array().unwrap().len(), 0);
        assert_eq!(json["summary"]["errors"], 0);
    }
}
