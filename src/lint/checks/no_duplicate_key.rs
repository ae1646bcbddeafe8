//! Keys defined more than once.

use super::split_at_equals;
use crate::lint::{Finding, LintCheck, LintContext};

/// Flags a key already defined earlier in the same document.
///
/// The earlier definitions are tracked in the run's [`LintContext`].
pub struct NoDuplicateKey;

impl LintCheck for NoDuplicateKey {
    fn name(&self) -> &str {
        "no-duplicate-key"
    }

    fn run(&self, line_number: usize, line: &str, ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        let key = raw_key.trim();
        if key.is_empty() {
            return None;
        }
        let first = ctx.record_key(key, line_number)?;
        Some(Finding::error(format!(
            "Duplicate variable name \"{key}\" (already defined on line {first})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_second_definition_citing_first_line() {
        let mut ctx = LintContext::new();
        assert!(NoDuplicateKey.run(1, "KEY=a", &mut ctx).is_none());
        assert!(NoDuplicateKey.run(2, "OTHER=b", &mut ctx).is_none());

        let finding = NoDuplicateKey.run(4, "KEY=c", &mut ctx).unwrap();
        assert_eq!(
            finding.message,
            "Duplicate variable name \"KEY\" (already defined on line 1)"
        );
    }

    #[test]
    fn compares_trimmed_keys() {
        let mut ctx = LintContext::new();
        NoDuplicateKey.run(1, "KEY=a", &mut ctx);
        assert!(NoDuplicateKey.run(2, "KEY =b", &mut ctx).is_some());
    }

    #[test]
    fn fresh_context_forgets_previous_run() {
        let mut first = LintContext::new();
        NoDuplicateKey.run(1, "KEY=a", &mut first);

        let mut second = LintContext::new();
        assert!(NoDuplicateKey.run(1, "KEY=a", &mut second).is_none());
    }

    #[test]
    fn ignores_empty_keys() {
        let mut ctx = LintContext::new();
        NoDuplicateKey.run(1, "=a", &mut ctx);
        assert!(NoDuplicateKey.run(2, "=b", &mut ctx).is_none());
    }
}
