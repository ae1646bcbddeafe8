//! Unquoted values containing `\n` / `\r` escape sequences.

use super::{is_quoted, split_at_equals};
use crate::lint::{Finding, LintCheck, LintContext};

/// Warns on unquoted values carrying `\n` or `\r` escapes.
pub struct NoUnquotedMultilineValue;

impl LintCheck for NoUnquotedMultilineValue {
    fn name(&self) -> &str {
        "no-unquoted-multiline-value"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, raw_value) = split_at_equals(line)?;
        let value = raw_value.trim();
        let looks_multiline = value.contains("\\n") || value.contains("\\r");
        if looks_multiline && !is_quoted(value) {
            return Some(Finding::warning(format!(
                "Unquoted multiline-looking value in \"{}\"",
                raw_key.trim()
            )));
        }
        None
    }
}
