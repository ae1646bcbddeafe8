//! Shared display helpers for rendering reports.
//!
//! Used by `lint` and `validate` so both commands print issues the same way.

use crate::output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
use crate::report::Report;
use crate::ui::UserInterface;

/// Render `report` for the document labelled `source` in `format`.
pub fn render_report(report: &Report, source: &str, format: OutputFormat, use_color: bool) -> String {
    let mut output = Vec::new();
    let written = match format {
        OutputFormat::Human => HumanFormatter::new(use_color).format(report, source, &mut output),
        OutputFormat::Json => JsonFormatter::new().format(report, source, &mut output),
    };
    match written {
        Ok(()) => String::from_utf8_lossy(&output).into_owned(),
        Err(e) => {
            tracing::warn!("Failed to format report: {e}");
            String::new()
        }
    }
}

/// Print `report` through the UI.
pub fn show_report(ui: &mut dyn UserInterface, report: &Report, source: &str, format: OutputFormat) {
    let text = render_report(report, source, format, ui.use_colors());
    if !text.is_empty() {
        ui.output(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Issue;
    use crate::ui::MockUI;

    #[test]
    fn human_report_lists_issues() {
        let report = Report::from_issues(vec![Issue::error("bad").with_line(2).with_rule("r")]);
        let mut ui = MockUI::new();
        show_report(&mut ui, &report, ".env", OutputFormat::Human);
        assert!(ui.output_text().starts_with(".env:2 [error] r → bad\n"));
    }

    #[test]
    fn empty_human_report_prints_nothing() {
        let mut ui = MockUI::new();
        show_report(&mut ui, &Report::default(), ".env", OutputFormat::Human);
        assert_eq!(ui.output_text(), "");
    }

    #[test]
    fn empty_json_report_still_prints() {
        let text = render_report(&Report::default(), ".env", OutputFormat::Json, false);
        assert!(text.contains("\"isValid\": true"));
    }
}
