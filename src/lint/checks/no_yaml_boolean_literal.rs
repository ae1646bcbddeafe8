//! YAML-style boolean words left unquoted.

use super::{is_quoted, split_at_equals, strip_inline_comment};
use crate::lint::{Finding, LintCheck, LintContext};

const YAML_BOOLEAN_LITERALS: &[&str] = &["true", "false", "yes", "no", "on", "off"];

/// Warns on unquoted `yes`/`no`/`on`/`off`/`true`/`false` values.
pub struct NoYamlBooleanLiteral;

impl LintCheck for NoYamlBooleanLiteral {
    fn name(&self) -> &str {
        "no-yaml-boolean-literal"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, raw_value) = split_at_equals(line)?;
        let raw_value = raw_value.trim();
        if is_quoted(raw_value) {
            return None;
        }

        let value = strip_inline_comment(raw_value).to_lowercase();
        YAML_BOOLEAN_LITERALS.contains(&value.as_str()).then(|| {
            Finding::warning(format!(
                "Unquoted YAML-style boolean literal \"{value}\" in \"{}\" may cause unexpected coercion",
                raw_key.trim()
            ))
        })
    }
}
