//! Project configuration.
//!
//! An optional `env-sentinel.yml` in the project root supplies default file
//! paths and lint settings. Command-line flags take precedence.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use env_sentinel::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("env-sentinel.yml"),
//!     "schema_file: config/.env-schema\nlint:\n  disable: [no-unsafe-key]\n",
//! ).unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.env_file.to_str(), Some(".env"));
//! assert_eq!(config.schema_file.to_str(), Some("config/.env-schema"));
//! assert_eq!(config.lint.disable, vec!["no-unsafe-key"]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_config, parse_config, CONFIG_FILE_NAME};
pub use schema::{LintSettings, SentinelConfig};
