//! Values that are just `""` or `''`.

use super::{split_at_equals, strip_inline_comment};
use crate::lint::{Finding, LintCheck, LintContext};

/// Warns on values that are an empty quoted string.
pub struct NoEmptyQuotes;

impl LintCheck for NoEmptyQuotes {
    fn name(&self) -> &str {
        "no-empty-quotes"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, raw_value) = split_at_equals(line)?;
        let value = strip_inline_comment(raw_value.trim());
        if value == "\"\"" || value == "''" {
            return Some(Finding::warning(format!(
                "Empty quoted string in \"{}\" is discouraged, use unquoted empty value instead",
                raw_key.trim()
            )));
        }
        None
    }
}
