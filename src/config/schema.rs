//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default env document path.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Default schema document path.
pub const DEFAULT_SCHEMA_FILE: &str = ".env-sentinel";

/// Root structure of `env-sentinel.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SentinelConfig {
    /// Env document to lint and validate.
    pub env_file: PathBuf,

    /// Schema document to validate against.
    pub schema_file: PathBuf,

    /// Lint settings
    pub lint: LintSettings,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            schema_file: PathBuf::from(DEFAULT_SCHEMA_FILE),
            lint: LintSettings::default(),
        }
    }
}

/// Lint settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintSettings {
    /// Checks turned off for every line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disable: Vec<String>,

    /// Treat warnings as failures.
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SentinelConfig::default();
        assert_eq!(config.env_file, PathBuf::from(".env"));
        assert_eq!(config.schema_file, PathBuf::from(".env-sentinel"));
        assert!(config.lint.disable.is_empty());
        assert!(!config.lint.strict);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: SentinelConfig = serde_yaml::from_str("lint:\n  strict: true\n").unwrap();
        assert!(config.lint.strict);
        assert_eq!(config.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn empty_yaml_is_default() {
        let config: SentinelConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SentinelConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_yaml::from_str::<SentinelConfig>("envfile: x\n").is_err());
    }
}
