//! Whitespace inside keys.

use super::{key_body, split_at_equals, strip_key_quotes};
use crate::lint::{Finding, LintCheck, LintContext};

/// Flags keys with whitespace inside them.
pub struct NoWhitespaceInKey;

impl LintCheck for NoWhitespaceInKey {
    fn name(&self) -> &str {
        "no-whitespace-in-key"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        let key = strip_key_quotes(raw_key.trim());
        if key.is_empty() {
            return None;
        }
        key_body(key)
            .chars()
            .any(char::is_whitespace)
            .then(|| {
                Finding::error(format!(
                    "Variable name contains internal whitespace in \"{key}\""
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> Option<Finding> {
        NoWhitespaceInKey.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn flags_internal_whitespace() {
        assert_eq!(
            run("MY KEY=x").unwrap().message,
            "Variable name contains internal whitespace in \"MY KEY\""
        );
        assert!(run("\"MY\tKEY\"=x").is_some());
    }

    #[test]
    fn ignores_whitespace_around_key() {
        assert!(run("  KEY  =x").is_none());
    }
}
