//! Punctuation inside key names.

use std::sync::LazyLock;

use regex::Regex;

use super::{key_body, split_at_equals, strip_key_quotes};
use crate::lint::{Finding, LintCheck, LintContext};

static INVALID_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").unwrap());

/// Flags key characters other than letters, digits, underscores and
/// whitespace. The first character is left to the leading-char check.
pub struct NoInvalidKeyDelimiter;

impl LintCheck for NoInvalidKeyDelimiter {
    fn name(&self) -> &str {
        "no-invalid-key-delimiter"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        let key = raw_key.trim();
        if key.is_empty() {
            return None;
        }

        let body = key_body(strip_key_quotes(key));
        let delimiters: Vec<String> = INVALID_DELIMITER
            .find_iter(body)
            .map(|m| format!("\"{}\"", m.as_str()))
            .collect();
        if delimiters.is_empty() {
            return None;
        }

        Some(Finding::error(format!(
            "Variable name contains invalid delimiter: {}",
            delimiters.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> Option<Finding> {
        NoInvalidKeyDelimiter.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn flags_dash_and_dot() {
        let finding = run("MY-APP.NAME=x").unwrap();
        assert_eq!(
            finding.message,
            "Variable name contains invalid delimiter: \"-\", \".\""
        );
    }

    #[test]
    fn allows_unicode_letters_digits_and_underscores() {
        assert!(run("CAFÉ_2=x").is_none());
        assert!(run("MY_KEY=x").is_none());
    }

    #[test]
    fn leaves_whitespace_and_first_char_to_other_checks() {
        assert!(run("MY KEY=x").is_none());
        assert!(run("-KEY=x").is_none());
    }

    #[test]
    fn ignores_surrounding_quotes() {
        assert!(run("\"KEY\"=x").is_none());
    }
}
