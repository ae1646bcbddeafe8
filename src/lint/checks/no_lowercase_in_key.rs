//! Lowercase letters in keys.

use super::{key_body, split_at_equals, strip_key_quotes};
use crate::lint::{Finding, LintCheck, LintContext};

/// Flags ASCII lowercase letters after the first key character.
pub struct NoLowercaseInKey;

impl LintCheck for NoLowercaseInKey {
    fn name(&self) -> &str {
        "no-lowercase-in-key"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        let key = strip_key_quotes(raw_key.trim());
        if key_body(key).chars().any(|c| c.is_ascii_lowercase()) {
            return Some(Finding::error(format!(
                "Variable name contains lowercase letter(s) in \"{key}\""
            )));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> Option<Finding> {
        NoLowercaseInKey.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn flags_lowercase_letters() {
        assert_eq!(
            run("myKey=x").unwrap().message,
            "Variable name contains lowercase letter(s) in \"myKey\""
        );
    }

    #[test]
    fn passes_uppercase_key() {
        assert!(run("MY_KEY_2=x").is_none());
    }

    #[test]
    fn first_character_is_not_checked() {
        assert!(run("mKEY=x").is_none());
    }
}
