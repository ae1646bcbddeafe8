//! Leading whitespace before a key.

use crate::lint::{Finding, LintCheck, LintContext};

/// Flags keys indented with whitespace.
pub struct NoLeadingSpaces;

impl LintCheck for NoLeadingSpaces {
    fn name(&self) -> &str {
        "no-leading-spaces"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let raw_key = line.split('=').next().unwrap_or_default();
        if !raw_key.is_empty() && raw_key != raw_key.trim_start() {
            return Some(Finding::error(format!(
                "Variable name has leading spaces: \"{raw_key}\""
            )));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> Option<Finding> {
        NoLeadingSpaces.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn flags_indented_key() {
        let finding = run("  KEY=value").unwrap();
        assert_eq!(finding.message, "Variable name has leading spaces: \"  KEY\"");
    }

    #[test]
    fn flags_tab_indentation() {
        assert!(run("\tKEY=value").is_some());
    }

    #[test]
    fn passes_flush_key() {
        assert!(run("KEY=value").is_none());
        assert!(run("KEY = value").is_none());
    }

    #[test]
    fn passes_line_starting_with_equals() {
        assert!(run("=value").is_none());
    }
}
