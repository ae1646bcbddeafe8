//! Whitespace directly after `=`.

use super::split_at_equals;
use crate::lint::{Finding, LintCheck, LintContext};

/// Warns when the value starts with whitespace, unless the remainder is only
/// a comment.
pub struct NoSpaceAfterEqual;

impl LintCheck for NoSpaceAfterEqual {
    fn name(&self) -> &str {
        "no-space-after-equal"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (_, after) = split_at_equals(line)?;
        if after.is_empty() || after.trim().starts_with('#') {
            return None;
        }
        after
            .starts_with(char::is_whitespace)
            .then(|| Finding::warning("Unexpected space(s) after `=`"))
    }
}
