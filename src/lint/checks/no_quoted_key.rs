//! Quoted keys.

use super::split_at_equals;
use crate::lint::{Finding, LintCheck, LintContext};

/// Flags keys that start or end with a quote, matched or not.
pub struct NoQuotedKey;

impl LintCheck for NoQuotedKey {
    fn name(&self) -> &str {
        "no-quoted-key"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        let key = raw_key.trim();
        let quotes = ['"', '\''];
        if key.starts_with(quotes) || key.ends_with(quotes) {
            return Some(Finding::error(format!(
                "Quoted keys are not allowed: {key}"
            )));
        }
        None
    }
}
