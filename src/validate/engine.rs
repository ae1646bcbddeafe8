//! Schema validation pipeline.
//!
//! For every schema entry the [`Validator`] checks required-ness first and
//! then runs each remaining rule through the validator registry. Unknown
//! rule names become warnings; failing validators become errors carrying
//! the offending value.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::rule::parse_rule_string;
use super::validators::{builtin_validators, ValueValidator};
use crate::parser::{split_lines, EnvMap, SchemaEntry};
use crate::registry::Registry;
use crate::report::{Issue, Report};

const REQUIRED: &str = "required";

/// Validates env values against schema entries.
#[derive(Clone, Default)]
pub struct Validator {
    validators: Registry<Arc<dyn ValueValidator>>,
}

impl Validator {
    /// Create a validator that knows no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with every built-in rule.
    pub fn with_builtins() -> Self {
        Self {
            validators: Registry::new(builtin_validators()),
        }
    }

    /// Register a custom rule, replacing a built-in one of the same name.
    pub fn register(&mut self, name: impl Into<String>, validator: impl ValueValidator + 'static) {
        self.validators.register(name, Arc::new(validator));
    }

    /// Names of the known rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.validators.names()
    }

    /// Validate `env` against `schema`.
    ///
    /// When the raw env text is supplied, issues carry the line on which
    /// their key was last assigned.
    pub fn validate(&self, env: &EnvMap, schema: &[SchemaEntry], content: Option<&str>) -> Report {
        let lines = content.map(key_lines).unwrap_or_default();
        let mut issues = Vec::new();

        for entry in schema {
            let key = entry.key.as_str();
            let rules = parse_rule_string(&entry.rule);
            let value = env.get(key);
            let line = lines.get(key).copied();
            let located = |issue: Issue| match line {
                Some(line) => issue.with_line(line),
                None => issue,
            };

            let required = rules.iter().any(|rule| rule.name == REQUIRED);
            if required && value.map_or(true, str::is_empty) {
                issues.push(located(
                    Issue::error(format!("Missing required variable: {key}"))
                        .with_key(key)
                        .with_rule(REQUIRED),
                ));
                continue;
            }

            let Some(value) = value else {
                continue;
            };

            for rule in rules.iter().filter(|rule| rule.name != REQUIRED) {
                let Some(validator) = self.validators.get(&rule.name) else {
                    issues.push(located(
                        Issue::warning(format!("Unknown rule '{}' for {key}", rule.name))
                            .with_key(key)
                            .with_rule(&rule.name),
                    ));
                    continue;
                };

                if let Err(message) = validator.validate(key, value, &rule.args) {
                    issues.push(located(
                        Issue::error(message)
                            .with_key(key)
                            .with_rule(&rule.name)
                            .with_value(value),
                    ));
                }
            }
        }

        let report = Report::from_issues(issues);
        debug!(
            keys = schema.len(),
            errors = report.summary.errors,
            warnings = report.summary.warnings,
            "Validated env against schema"
        );
        report
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.validators.names())
            .finish()
    }
}

/// Map each assigned key to the 1-based line of its last assignment.
fn key_lines(content: &str) -> HashMap<String, usize> {
    let mut lines = HashMap::new();
    for (index, line) in split_lines(content).enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, _)) = trimmed.split_once('=') {
            lines.insert(key.trim().to_string(), index + 1);
        }
    }
    lines
}

/// Validate `env` against `schema` with the built-in rules.
///
/// # Example
///
/// ```
/// use env_sentinel::{parse_env_content, parse_schema_content, validate};
///
/// let content = "DB_HOST=localhost\nDB_PORT=abc";
/// let env = parse_env_content(content).unwrap();
/// let schema = parse_schema_content("DB_HOST=required\nDB_PORT=required|number").unwrap();
///
/// let report = validate(&env, &schema, Some(content));
/// assert!(!report.is_valid);
/// assert_eq!(report.issues[0].key.as_deref(), Some("DB_PORT"));
/// assert_eq!(report.issues[0].rule.as_deref(), Some("number"));
/// assert_eq!(report.issues[0].line, Some(2));
/// ```
pub fn validate(env: &EnvMap, schema: &[SchemaEntry], content: Option<&str>) -> Report {
    Validator::with_builtins().validate(env, schema, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::validate::ValidationOutcome;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs.iter().copied().collect()
    }

    fn schema(pairs: &[(&str, &str)]) -> Vec<SchemaEntry> {
        pairs.iter().map(|(k, r)| SchemaEntry::new(*k, *r)).collect()
    }

    #[test]
    fn matching_env_is_valid() {
        let report = validate(
            &env(&[("DB_HOST", "localhost"), ("DB_PORT", "3306")]),
            &schema(&[("DB_HOST", "required"), ("DB_PORT", "required|number")]),
            None,
        );
        assert!(report.is_valid);
        assert!(report.issues.is_empty());
        assert_eq!(report.summary.total, 0);
    }

    #[test]
    fn missing_required_stops_further_checks() {
        let report = validate(
            &env(&[]),
            &schema(&[("DB_PORT", "required|number|min:1")]),
            None,
        );
        assert_eq!(report.issues.len(), 1);
        let issue = &report.issues[0];
        assert_eq!(issue.message, "Missing required variable: DB_PORT");
        assert_eq!(issue.rule.as_deref(), Some("required"));
        assert_eq!(issue.key.as_deref(), Some("DB_PORT"));
        assert_eq!(issue.value, None);
    }

    #[test]
    fn empty_required_value_counts_as_missing() {
        let report = validate(
            &env(&[("TOKEN", "")]),
            &schema(&[("TOKEN", "required")]),
            None,
        );
        assert_eq!(report.issues[0].rule.as_deref(), Some("required"));
    }

    #[test]
    fn absent_optional_key_is_skipped() {
        let report = validate(&env(&[]), &schema(&[("PORT", "number|bogus")]), None);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn present_empty_optional_value_is_validated() {
        let report = validate(&env(&[("PORT", "")]), &schema(&[("PORT", "number")]), None);
        assert_eq!(report.issues[0].message, "Invalid number for PORT");
    }

    #[test]
    fn port_range_checks() {
        let rules = schema(&[("PORT", "required|number|min:1000|max:65535")]);

        let low = validate(&env(&[("PORT", "100")]), &rules, None);
        assert_eq!(low.issues.len(), 1);
        assert_eq!(low.issues[0].rule.as_deref(), Some("min"));

        let high = validate(&env(&[("PORT", "70000")]), &rules, None);
        assert_eq!(high.issues.len(), 1);
        assert_eq!(high.issues[0].rule.as_deref(), Some("max"));

        assert!(validate(&env(&[("PORT", "8080")]), &rules, None).is_valid);
    }

    #[test]
    fn unknown_rule_is_a_warning() {
        let report = validate(&env(&[("HOST", "x")]), &schema(&[("HOST", "hostname")]), None);
        assert!(report.is_valid);
        let issue = &report.issues[0];
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.message, "Unknown rule 'hostname' for HOST");
        assert_eq!(issue.rule.as_deref(), Some("hostname"));
    }

    #[test]
    fn string_rule_is_known() {
        let report = validate(&env(&[("NAME", "x")]), &schema(&[("NAME", "string")]), None);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn failing_rule_carries_value() {
        let report = validate(
            &env(&[("MODE", "staging")]),
            &schema(&[("MODE", "enum:dev,prod")]),
            None,
        );
        let issue = &report.issues[0];
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.value.as_deref(), Some("staging"));
        assert_eq!(issue.message, "MODE must be one of: dev, prod");
    }

    #[test]
    fn every_failing_rule_is_reported() {
        let report = validate(
            &env(&[("PASSWORD", "abc")]),
            &schema(&[("PASSWORD", "min:8|secure")]),
            None,
        );
        assert_eq!(report.summary.errors, 2);
    }

    #[test]
    fn attributes_last_assignment_line() {
        let content = "# header\nPORT=1\n\nPORT=abc\n";
        let report = validate(
            &env(&[("PORT", "abc")]),
            &schema(&[("PORT", "number")]),
            Some(content),
        );
        assert_eq!(report.issues[0].line, Some(4));
    }

    #[test]
    fn custom_rule_overrides_builtin() {
        let mut validator = Validator::with_builtins();
        validator.register("number", |_: &str, _: &str, _: &[String]| -> ValidationOutcome {
            Ok(())
        });
        let report = validator.validate(
            &env(&[("PORT", "abc")]),
            &schema(&[("PORT", "number")]),
            None,
        );
        assert!(report.is_valid);
    }

    #[test]
    fn custom_rule_is_available_by_name() {
        let mut validator = Validator::with_builtins();
        validator.register("https", |key: &str, value: &str, _: &[String]| -> ValidationOutcome {
            if value.starts_with("https://") {
                Ok(())
            } else {
                Err(format!("{key} must start with https://"))
            }
        });
        assert!(validator.rule_names().contains(&"https"));

        let report = validator.validate(
            &env(&[("API_URL", "http://api")]),
            &schema(&[("API_URL", "required|https")]),
            None,
        );
        assert_eq!(report.issues[0].message, "API_URL must start with https://");
    }

    #[test]
    fn empty_validator_warns_on_every_rule() {
        let report = Validator::new().validate(
            &env(&[("PORT", "1")]),
            &schema(&[("PORT", "required|number")]),
            None,
        );
        assert_eq!(report.summary.warnings, 1);
        assert!(report.is_valid);
    }
}
