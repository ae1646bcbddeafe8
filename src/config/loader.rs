//! Configuration file discovery and loading.

use crate::config::schema::SentinelConfig;
use crate::error::{Result, SentinelError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "env-sentinel.yml";

/// Path of the config file for a project root, if it exists.
pub fn config_path(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the project config, falling back to defaults when there is none.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path) -> Result<SentinelConfig> {
    let Some(path) = config_path(project_root) else {
        debug!(root = %project_root.display(), "No config file, using defaults");
        return Ok(SentinelConfig::default());
    };

    let content = fs::read_to_string(&path)?;
    let config = parse_config(&content, &path)?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Parse YAML content into a [`SentinelConfig`].
///
/// Blank content yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<SentinelConfig> {
    if content.trim().is_empty() {
        return Ok(SentinelConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SentinelError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        assert!(config_path(temp.path()).is_none());
        assert_eq!(load_config(temp.path()).unwrap(), SentinelConfig::default());
    }

    #[test]
    fn loads_file_from_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "env_file: .env.local\nlint:\n  strict: true\n",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.env_file, PathBuf::from(".env.local"));
        assert!(config.lint.strict);
    }

    #[test]
    fn blank_file_yields_defaults() {
        let config = parse_config("  \n", Path::new("env-sentinel.yml")).unwrap();
        assert_eq!(config, SentinelConfig::default());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = parse_config("lint: [unclosed", Path::new("env-sentinel.yml")).unwrap_err();
        match err {
            SentinelError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("env-sentinel.yml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
