//! The same `${NAME}` used twice in one value.

use std::sync::LazyLock;

use regex::Regex;

use super::{is_quoted, split_at_equals, strip_inline_comment};
use crate::lint::{Finding, LintCheck, LintContext};

static UPPER_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Z0-9_]+)\}").unwrap());

/// Notes the first reference that appears more than once in an unquoted
/// value.
pub struct NoDuplicateReference;

impl LintCheck for NoDuplicateReference {
    fn name(&self) -> &str {
        "no-duplicate-reference"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, raw_value) = split_at_equals(line)?;
        let raw_value = raw_value.trim();
        if is_quoted(raw_value) {
            return None;
        }
        let value = strip_inline_comment(raw_value);

        let mut counts: Vec<(&str, usize)> = Vec::new();
        for caps in UPPER_REFERENCE.captures_iter(value) {
            let Some(name) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };
            match counts.iter_mut().find(|(n, _)| *n == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name, 1)),
            }
        }

        let (name, count) = counts.into_iter().find(|(_, count)| *count > 1)?;
        Some(Finding::notice(format!(
            "Duplicate reference \"${{{name}}}\" found {count} times in \"{}\"",
            raw_key.trim()
        )))
    }
}
