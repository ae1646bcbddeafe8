//! Shell metacharacters in unquoted values.

use std::sync::LazyLock;

use regex::Regex;

use super::{is_quoted, split_at_equals};
use crate::lint::{Finding, LintCheck, LintContext};

const SHELL_SPECIAL_CHARS: &[char] = &[
    '$', '`', '!', '*', ';', '|', '&', '>', '<', '?', '(', ')', '{', '}', '[', ']', '=',
];

static ENV_SUBSTITUTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{[^}]+\}").unwrap());

/// Cut the value at the first `#` that is not escaped by a backslash.
fn strip_unescaped_comment(value: &str) -> &str {
    let mut escaped = false;
    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '#' {
            return &value[..i];
        }
    }
    value
}

/// Flags the first shell metacharacter in an unquoted value that is not
/// escaped by an odd number of backslashes. `${…}` substitutions and
/// multiline-looking values are skipped.
pub struct NoUnescapedShellChars;

impl LintCheck for NoUnescapedShellChars {
    fn name(&self) -> &str {
        "no-unescaped-shell-chars"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, raw_value) = split_at_equals(line)?;
        let value = strip_unescaped_comment(raw_value).trim();

        if is_quoted(value) || value.contains("\\n") || value.contains("\\r") {
            return None;
        }

        // Blank out substitutions so their characters are not reported.
        let masked = ENV_SUBSTITUTION.replace_all(value, |caps: &regex::Captures| {
            " ".repeat(caps[0].chars().count())
        });

        let chars: Vec<char> = masked.chars().collect();
        for (i, &c) in chars.iter().enumerate() {
            if !SHELL_SPECIAL_CHARS.contains(&c) {
                continue;
            }
            let backslashes = chars[..i].iter().rev().take_while(|&&p| p == '\\').count();
            if backslashes % 2 == 0 {
                return Some(Finding::error(format!(
                    "Unescaped shell special character '{c}' in value of \"{}\"",
                    raw_key.trim()
                )));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> Option<Finding> {
        NoUnescapedShellChars.run(1, line, &mut LintContext::new())
    }

    #[test]
    fn flags_first_unescaped_character() {
        assert_eq!(
            run("CMD=echo hi; rm -rf").unwrap().message,
            "Unescaped shell special character ';' in value of \"CMD\""
        );
        assert!(run("CMD=a|b").is_some());
        assert!(run("CMD=`whoami`").is_some());
    }

    #[test]
    fn respects_backslash_escapes() {
        assert!(run(r"PASS=abc\!def").is_none());
        assert!(run(r"PASS=abc\\!def").is_some());
    }

    #[test]
    fn skips_quoted_values() {
        assert!(run("CMD=\"echo hi; rm\"").is_none());
        assert!(run("CMD='a|b'  # comment").is_none());
    }

    #[test]
    fn ignores_substitutions() {
        assert!(run("URL=http://${HOST}/path").is_none());
    }

    #[test]
    fn bare_dollar_reference_is_flagged() {
        assert!(run("URL=$HOST").is_some());
    }

    #[test]
    fn strips_inline_comment() {
        assert!(run("NAME=value # not; shell").is_none());
        assert!(run(r"NAME=val\#ue").is_none());
    }

    #[test]
    fn skips_multiline_looking_values() {
        assert!(run(r"CERT=a\nb;c").is_none());
    }
}
