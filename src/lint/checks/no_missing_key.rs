//! Assignments with no key.

use super::split_at_equals;
use crate::lint::{Finding, LintCheck, LintContext};

/// Flags lines like `=value`.
pub struct NoMissingKey;

impl LintCheck for NoMissingKey {
    fn name(&self) -> &str {
        "no-missing-key"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        raw_key
            .trim()
            .is_empty()
            .then(|| Finding::error("Missing variable name before \"=\" sign"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> Option<Finding> {
        NoMissingKey.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn flags_missing_key() {
        assert_eq!(
            run("=value").unwrap().message,
            "Missing variable name before \"=\" sign"
        );
        assert!(run("   =value").is_some());
    }

    #[test]
    fn passes_present_key() {
        assert!(run("KEY=value").is_none());
    }

    #[test]
    fn ignores_lines_without_equals() {
        assert!(run("just text").is_none());
    }
}
