//! Keys starting with something other than a letter or underscore.

use super::strip_key_quotes;
use crate::lint::{Finding, LintCheck, LintContext};

/// Flags keys whose first character is not `A-Z`, `a-z` or `_`.
///
/// A line without `=` is treated as a bare key.
pub struct NoInvalidKeyLeadingChar;

impl LintCheck for NoInvalidKeyLeadingChar {
    fn name(&self) -> &str {
        "no-invalid-key-leading-char"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let raw_key = line.split('=').next().unwrap_or_default();
        let key = strip_key_quotes(raw_key.trim());
        let first = key.chars().next()?;

        if first.is_ascii_alphabetic() || first == '_' {
            return None;
        }
        Some(Finding::error(format!(
            "Variable name starts with invalid character: \"{first}\" in \"{key}\""
        )))
    }
}
