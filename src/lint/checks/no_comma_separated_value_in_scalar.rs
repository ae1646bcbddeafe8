//! Unquoted comma-separated values.

use super::{is_quoted, split_at_equals, strip_inline_comment};
use crate::lint::{Finding, LintCheck, LintContext};

/// Warns when an unquoted value looks like a comma-separated list.
pub struct NoCommaSeparatedValueInScalar;

impl LintCheck for NoCommaSeparatedValueInScalar {
    fn name(&self) -> &str {
        "no-comma-separated-value-in-scalar"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, raw_value) = split_at_equals(line)?;
        let value = strip_inline_comment(raw_value.trim());
        if is_quoted(value) || !value.contains(',') {
            return None;
        }
        Some(Finding::warning(format!(
            "Unquoted comma-separated value in \"{}\"",
            raw_key.trim()
        )))
    }
}
