//! Non-printable or non-ASCII characters in keys.

use super::{key_body, split_at_equals, strip_key_quotes};
use crate::lint::{Finding, LintCheck, LintContext};

/// Flags key characters outside printable ASCII (0x20 to 0x7E), listing each
/// offending character once.
pub struct NoInvalidKeyCharacters;

impl LintCheck for NoInvalidKeyCharacters {
    fn name(&self) -> &str {
        "no-invalid-key-characters"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        let body = key_body(strip_key_quotes(raw_key.trim()));

        let mut invalid: Vec<char> = Vec::new();
        for c in body.chars().filter(|c| !matches!(c, '\x20'..='\x7E')) {
            if !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        if invalid.is_empty() {
            return None;
        }

        let listed: Vec<String> = invalid.iter().map(|c| format!("\"{c}\"")).collect();
        Some(Finding::error(format!(
            "Variable name contains invalid character(s): {}",
            listed.join(", ")
        )))
    }
}
