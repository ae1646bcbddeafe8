//! Malformed `${…}` references.
//!
//! Unlike [`crate::reference`], this scan accepts any text between the braces
//! so that broken references can be reported. Parameter expansion suffixes
//! such as `${VAR:-default}` are allowed; only the name before the first
//! `:`, `=`, `?`, `#` or `%` is checked.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{Finding, LintCheck, LintContext};

static BRACED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").unwrap());
static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// Flags empty or badly named `${…}` references.
pub struct NoInvalidReferenceSyntax;

impl LintCheck for NoInvalidReferenceSyntax {
    fn name(&self) -> &str {
        "no-invalid-reference-syntax"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let mut pos = 0;
        while let Some(caps) = BRACED_REFERENCE.captures_at(line, pos) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            if line[..whole.start()].ends_with('\\') {
                pos = whole.start() + 1;
                continue;
            }
            pos = whole.end();

            let inner = inner.as_str();
            if inner.is_empty() {
                return Some(Finding::error("Empty variable reference `${}` is invalid"));
            }

            let name = inner
                .split([':', '=', '?', '#', '%'])
                .next()
                .unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                return Some(Finding::error(format!(
                    "Invalid variable name: must not start with a digit → \"{name}\""
                )));
            }
            if !VALID_NAME.is_match(name) {
                return Some(Finding::error(format!(
                    "Invalid character in variable name: \"{name}\""
                )));
            }
        }
        None
    }
}
