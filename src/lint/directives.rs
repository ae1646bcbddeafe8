//! Inline `# es-disable:` directives.
//!
//! A directive such as
//!
//! ```text
//! # es-disable: no-unsafe-key, no-lowercase-in-key
//! Path=/usr/bin
//! ```
//!
//! suppresses the named checks on the next non-blank, non-comment line only.
//! Several directives in front of the same line accumulate.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static DISABLE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#\s*es-disable:\s*(.+)").unwrap());

/// Whether a line is blank or a comment.
pub(crate) fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Checks disabled per line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DisableDirectives {
    by_line: HashMap<usize, HashSet<String>>,
}

impl DisableDirectives {
    /// Collect directives from the document's lines.
    pub fn parse(lines: &[&str]) -> Self {
        let mut by_line: HashMap<usize, HashSet<String>> = HashMap::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = DISABLE_DIRECTIVE.captures(line) else {
                continue;
            };
            let rules: Vec<String> = caps[1]
                .split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect();
            if rules.is_empty() {
                continue;
            }

            let target = lines
                .iter()
                .enumerate()
                .skip(i + 1)
                .find(|(_, next)| !is_blank_or_comment(next))
                .map(|(j, _)| j + 1);
            if let Some(target) = target {
                by_line.entry(target).or_default().extend(rules);
            }
        }

        Self { by_line }
    }

    /// Whether `rule` is disabled on the 1-based `line`.
    pub fn is_disabled(&self, rule: &str, line: usize) -> bool {
        self.by_line
            .get(&line)
            .is_some_and(|rules| rules.contains(rule))
    }

    /// Whether no directive was found.
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}
