//! Env document parsing.
//!
//! Turns raw `KEY=value` text into an ordered [`EnvMap`], resolving
//! `${VAR}` style references against values declared earlier.

use std::collections::HashMap;

use tracing::debug;

use super::{split_lines, strip_matching_quotes};
use crate::error::{DocumentKind, Result};
use crate::reference::{has_reference, resolve_references};

/// Ordered key to value table.
///
/// Iteration follows the order in which keys were first inserted.
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl EnvMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Whether the map holds the key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Split a document line into a trimmed key and an unquoted value.
///
/// Returns `None` for blank lines, comments, and lines with no `=` or an
/// empty key.
pub(crate) fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Parse an env document.
///
/// Values wrapped in matching single or double quotes have the quotes
/// removed; nothing else is unescaped. Values containing a reference are
/// resolved after every plain value has been read, in declaration order, so
/// a referencing value sees plain values declared anywhere and referencing
/// values declared before it.
///
/// # Errors
///
/// Returns [`SentinelError::ReferenceNotFound`](crate::error::SentinelError::ReferenceNotFound)
/// when a reference names a key that is not available. This includes a key
/// referencing itself.
///
/// # Example
///
/// ```
/// use env_sentinel::parser::parse_env_content;
///
/// let env = parse_env_content("HOST=localhost\nURL=\"http://${HOST}:8080\"").unwrap();
/// assert_eq!(env.get("URL"), Some("http://localhost:8080"));
///
/// assert!(parse_env_content("URL=$MISSING").is_err());
/// ```
pub fn parse_env_content(content: &str) -> Result<EnvMap> {
    let mut env = EnvMap::new();
    let mut pending: Vec<(&str, &str)> = Vec::new();

    for line in split_lines(content) {
        let Some((key, raw_value)) = split_assignment(line) else {
            continue;
        };
        let value = strip_matching_quotes(raw_value);

        // A later declaration supersedes an earlier one still waiting on references.
        pending.retain(|(k, _)| *k != key);

        if has_reference(value) {
            pending.push((key, value));
        } else {
            env.insert(key, value);
        }
    }

    debug!(
        resolved = env.len(),
        pending = pending.len(),
        "Parsed env document"
    );

    for (key, value) in pending {
        let resolved = resolve_references(value, DocumentKind::Env, |name| env.get(name))?;
        env.insert(key, resolved);
    }

    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SentinelError;

    #[test]
    fn parses_simple_document() {
        let env = parse_env_content("KEY1=value1\nKEY2=value2\n").unwrap();
        assert_eq!(env.get("KEY1"), Some("value1"));
        assert_eq!(env.get("KEY2"), Some("value2"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "# comment\n\n   \nKEY=value\n  # indented comment\n";
        let env = parse_env_content(content).unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("KEY"), Some("value"));
    }

    #[test]
    fn strips_matching_quotes_only() {
        let content = "DOUBLE=\"double quoted\"\nSINGLE='single quoted'\nMIXED=\"oops'";
        let env = parse_env_content(content).unwrap();
        assert_eq!(env.get("DOUBLE"), Some("double quoted"));
        assert_eq!(env.get("SINGLE"), Some("single quoted"));
        assert_eq!(env.get("MIXED"), Some("\"oops'"));
    }

    #[test]
    fn keeps_equals_signs_in_value() {
        let env = parse_env_content("URL=https://example.com?foo=bar").unwrap();
        assert_eq!(env.get("URL"), Some("https://example.com?foo=bar"));
    }

    #[test]
    fn trims_whitespace_around_equals() {
        let env = parse_env_content("KEY = value with spaces").unwrap();
        assert_eq!(env.get("KEY"), Some("value with spaces"));
    }

    #[test]
    fn drops_lines_without_key_or_equals() {
        let env = parse_env_content("=value\nNOEQUALS\nOK=1").unwrap();
        assert_eq!(env.keys().collect::<Vec<_>>(), vec!["OK"]);
    }

    #[test]
    fn handles_empty_value() {
        let env = parse_env_content("EMPTY=").unwrap();
        assert_eq!(env.get("EMPTY"), Some(""));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let env = parse_env_content("A=1\r\nB=2\r\n").unwrap();
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.get("B"), Some("2"));
    }

    #[test]
    fn resolves_backward_reference() {
        let env = parse_env_content("FOO=bar\nBAR=${FOO}").unwrap();
        assert_eq!(env.get("BAR"), Some("bar"));
    }

    #[test]
    fn resolves_reference_to_later_plain_value() {
        let env = parse_env_content("URL=http://$HOST\nHOST=localhost").unwrap();
        assert_eq!(env.get("URL"), Some("http://localhost"));
    }

    #[test]
    fn resolves_chain_in_declaration_order() {
        let env = parse_env_content("A=x\nB=${A}y\nC={$B}z").unwrap();
        assert_eq!(env.get("C"), Some("xyz"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let env = parse_env_content("H=h\nV=${H}-${H}-$H").unwrap();
        assert_eq!(env.get("V"), Some("h-h-h"));
    }

    #[test]
    fn missing_reference_fails_with_key_name() {
        let err = parse_env_content("BAR=$MISSING").unwrap_err();
        assert!(matches!(
            err,
            SentinelError::ReferenceNotFound { ref key, origin: DocumentKind::Env } if key == "MISSING"
        ));
    }

    #[test]
    fn self_reference_fails() {
        let err = parse_env_content("FOO=$FOO").unwrap_err();
        assert_eq!(err.to_string(), "Referenced key \"FOO\" not found in the env.");
    }

    #[test]
    fn forward_reference_between_pending_values_fails() {
        let err = parse_env_content("A=${B}\nB=${C}\nC=1").unwrap_err();
        assert!(err.to_string().contains("\"B\""));
    }

    #[test]
    fn escaped_dollar_is_kept_literally() {
        let env = parse_env_content(r"PRICE=\$5").unwrap();
        assert_eq!(env.get("PRICE"), Some(r"\$5"));
    }

    #[test]
    fn duplicate_key_last_write_wins_in_first_position() {
        let env = parse_env_content("A=1\nB=2\nA=3").unwrap();
        assert_eq!(env.get("A"), Some("3"));
        assert_eq!(env.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn later_plain_value_supersedes_pending_reference() {
        let env = parse_env_content("A=$MISSING\nA=plain").unwrap();
        assert_eq!(env.get("A"), Some("plain"));
    }

    #[test]
    fn reserializing_plain_values_round_trips() {
        let content = "A=1\nB=two words\nC=\nD=x=y";
        let env = parse_env_content(content).unwrap();
        let serialized: String = env.iter().map(|(k, v)| format!("{k}={v}\n")).collect();
        assert_eq!(parse_env_content(&serialized).unwrap(), env);
    }

    #[test]
    fn env_map_from_iterator_preserves_order() {
        let env: EnvMap = [("B", "2"), ("A", "1")].into_iter().collect();
        assert_eq!(env.keys().collect::<Vec<_>>(), vec!["B", "A"]);
        assert!(env.contains_key("A"));
        assert!(!env.is_empty());
    }
}
