//! Built-in lint checks.
//!
//! Each check lives in its own module and inspects a single raw line. The
//! helpers below implement the shared line conventions: the key is the text
//! before the first `=`, the value is everything after it.

pub mod no_comma_separated_value_in_scalar;
pub mod no_duplicate_key;
pub mod no_duplicate_reference;
pub mod no_empty_quotes;
pub mod no_empty_value;
pub mod no_invalid_key_characters;
pub mod no_invalid_key_delimiter;
pub mod no_invalid_key_leading_char;
pub mod no_invalid_reference_syntax;
pub mod no_leading_spaces;
pub mod no_lowercase_in_key;
pub mod no_missing_key;
pub mod no_quoted_key;
pub mod no_space_after_equal;
pub mod no_space_before_equal;
pub mod no_unescaped_shell_chars;
pub mod no_unquoted_multiline_value;
pub mod no_unsafe_key;
pub mod no_whitespace_in_key;
pub mod no_yaml_boolean_literal;

use std::sync::Arc;

use super::check::LintCheck;

pub use no_comma_separated_value_in_scalar::NoCommaSeparatedValueInScalar;
pub use no_duplicate_key::NoDuplicateKey;
pub use no_duplicate_reference::NoDuplicateReference;
pub use no_empty_quotes::NoEmptyQuotes;
pub use no_empty_value::NoEmptyValue;
pub use no_invalid_key_characters::NoInvalidKeyCharacters;
pub use no_invalid_key_delimiter::NoInvalidKeyDelimiter;
pub use no_invalid_key_leading_char::NoInvalidKeyLeadingChar;
pub use no_invalid_reference_syntax::NoInvalidReferenceSyntax;
pub use no_leading_spaces::NoLeadingSpaces;
pub use no_lowercase_in_key::NoLowercaseInKey;
pub use no_missing_key::NoMissingKey;
pub use no_quoted_key::NoQuotedKey;
pub use no_space_after_equal::NoSpaceAfterEqual;
pub use no_space_before_equal::NoSpaceBeforeEqual;
pub use no_unescaped_shell_chars::NoUnescapedShellChars;
pub use no_unquoted_multiline_value::NoUnquotedMultilineValue;
pub use no_unsafe_key::NoUnsafeKey;
pub use no_whitespace_in_key::NoWhitespaceInKey;
pub use no_yaml_boolean_literal::NoYamlBooleanLiteral;

/// All built-in checks, in reporting order.
pub fn builtin_checks() -> Vec<Arc<dyn LintCheck>> {
    vec![
        Arc::new(NoLeadingSpaces),
        Arc::new(NoEmptyValue),
        Arc::new(NoMissingKey),
        Arc::new(NoDuplicateKey),
        Arc::new(NoInvalidKeyDelimiter),
        Arc::new(NoInvalidKeyLeadingChar),
        Arc::new(NoInvalidKeyCharacters),
        Arc::new(NoWhitespaceInKey),
        Arc::new(NoLowercaseInKey),
        Arc::new(NoUnsafeKey),
        Arc::new(NoQuotedKey),
        Arc::new(NoSpaceBeforeEqual),
        Arc::new(NoSpaceAfterEqual),
        Arc::new(NoInvalidReferenceSyntax),
        Arc::new(NoUnquotedMultilineValue),
        Arc::new(NoUnescapedShellChars),
        Arc::new(NoYamlBooleanLiteral),
        Arc::new(NoEmptyQuotes),
        Arc::new(NoDuplicateReference),
        Arc::new(NoCommaSeparatedValueInScalar),
    ]
}

/// Split a line at its first `=` into the raw key and raw value.
pub(crate) fn split_at_equals(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
}

/// Remove one leading and one trailing quote character, independently.
pub(crate) fn strip_key_quotes(key: &str) -> &str {
    let key = key
        .strip_prefix(['"', '\''])
        .unwrap_or(key);
    key.strip_suffix(['"', '\'']).unwrap_or(key)
}

/// Whether a value starts and ends with the same quote character.
pub(crate) fn is_quoted(value: &str) -> bool {
    (value.starts_with('"') && value.ends_with('"'))
        || (value.starts_with('\'') && value.ends_with('\''))
}

/// The part of a value before the first `#`, trimmed.
pub(crate) fn strip_inline_comment(value: &str) -> &str {
    value.split('#').next().unwrap_or_default().trim()
}

/// Everything after the first character.
pub(crate) fn key_body(key: &str) -> &str {
    let mut chars = key.chars();
    chars.next();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_names_are_unique() {
        let checks = builtin_checks();
        let names: HashSet<_> = checks.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names.len(), checks.len());
        assert_eq!(checks.len(), 20);
    }

    #[test]
    fn strip_key_quotes_removes_each_side_once() {
        assert_eq!(strip_key_quotes("\"KEY\""), "KEY");
        assert_eq!(strip_key_quotes("'KEY"), "KEY");
        assert_eq!(strip_key_quotes("KEY\""), "KEY");
        assert_eq!(strip_key_quotes("\"\"KEY\"\""), "\"KEY\"");
        assert_eq!(strip_key_quotes("\""), "");
    }

    #[test]
    fn is_quoted_requires_same_quote_on_both_ends() {
        assert!(is_quoted("\"a\""));
        assert!(is_quoted("'a'"));
        assert!(!is_quoted("\"a'"));
        assert!(!is_quoted("a"));
    }

    #[test]
    fn strip_inline_comment_cuts_at_first_hash() {
        assert_eq!(strip_inline_comment(" value # note"), "value");
        assert_eq!(strip_inline_comment("#only"), "");
        assert_eq!(strip_inline_comment("plain"), "plain");
    }

    #[test]
    fn key_body_skips_first_char() {
        assert_eq!(key_body("ABC"), "BC");
        assert_eq!(key_body("éB"), "B");
        assert_eq!(key_body(""), "");
    }
}
