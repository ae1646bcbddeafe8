//! Whitespace directly before `=`.

use super::split_at_equals;
use crate::lint::{Finding, LintCheck, LintContext};

/// Warns on whitespace between the key and `=`.
pub struct NoSpaceBeforeEqual;

impl LintCheck for NoSpaceBeforeEqual {
    fn name(&self) -> &str {
        "no-space-before-equal"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (before, _) = split_at_equals(line)?;
        before
            .ends_with(char::is_whitespace)
            .then(|| Finding::warning("Unexpected space(s) before `=`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn run(line: &str) -> Option<Finding> {
        NoSpaceBeforeEqual.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn warns_on_space_before_equals() {
        let finding = run("KEY =value").unwrap();
        assert_eq!(finding.message, "Unexpected space(s) before `=`");
        assert_eq!(finding.severity, Some(Severity::Warning));
    }

    #[test]
    fn passes_tight_assignment() {
        assert!(run("KEY=value").is_none());
        assert!(run("KEY=value with = inside").is_none());
    }

    #[test]
    fn ignores_leading_equals() {
        assert!(run("=value").is_none());
    }
}
