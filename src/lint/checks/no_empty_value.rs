//! Assignments with nothing after `=`.

use super::split_at_equals;
use crate::lint::{Finding, LintCheck, LintContext};

/// Warns on empty values, including a value that is only a comment.
pub struct NoEmptyValue;

impl LintCheck for NoEmptyValue {
    fn name(&self) -> &str {
        "no-empty-value"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, raw_value) = split_at_equals(line)?;
        let value = raw_value.trim();
        if value.is_empty() || value.starts_with('#') {
            return Some(Finding::warning(format!(
                "Variable \"{}\" has an empty value",
                raw_key.trim()
            )));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn run(line: &str) -> Option<Finding> {
        NoEmptyValue.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn warns_on_empty_value() {
        let finding = run("KEY=").unwrap();
        assert_eq!(finding.message, "Variable \"KEY\" has an empty value");
        assert_eq!(finding.severity, Some(Severity::Warning));
    }

    #[test]
    fn warns_on_whitespace_and_comment_only_value() {
        assert!(run("KEY=   ").is_some());
        assert!(run("KEY= # todo").is_some());
    }

    #[test]
    fn passes_quoted_empty_and_real_values() {
        assert!(run("KEY=\"\"").is_none());
        assert!(run("KEY=value").is_none());
    }

    #[test]
    fn ignores_lines_without_equals() {
        assert!(run("KEY").is_none());
    }
}
