//! env-sentinel - Lint, validate and document `.env` files.
//!
//! env-sentinel checks env documents for style and safety problems,
//! validates them against a lightweight schema file (`.env-sentinel`) and
//! generates schema templates and Markdown documentation.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration (`env-sentinel.yml`)
//! - [`error`] - Error types and result aliases
//! - [`generate`] - Schema inference and documentation generation
//! - [`lint`] - Line-by-line env document checks
//! - [`output`] - Human and JSON report formatters
//! - [`parser`] - Env and schema document parsing
//! - [`reference`] - `${VAR}` reference resolution
//! - [`registry`] - Two-tier named registries for checks and validators
//! - [`report`] - Issues, summaries and reports
//! - [`ui`] - Terminal output
//! - [`validate`] - Schema validation
//!
//! # Example
//!
//! ```
//! use env_sentinel::{parse_env_content, parse_schema_content, validate};
//!
//! let env = parse_env_content("PORT=abc").unwrap();
//! let schema = parse_schema_content("PORT=required|number").unwrap();
//! let report = validate(&env, &schema, None);
//! assert!(!report.is_valid);
//! assert_eq!(report.issues[0].message, "Invalid number for PORT");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod lint;
pub mod output;
pub mod parser;
pub mod reference;
pub mod registry;
pub mod report;
pub mod ui;
pub mod validate;

pub use error::{DocumentKind, Result, SentinelError};
pub use lint::{lint, Linter};
pub use parser::{
    parse_env_content, parse_schema_content, parse_schema_document, EnvMap, SchemaDocument,
    SchemaEntry,
};
pub use registry::Registry;
pub use report::{Issue, Report, Severity, Summary};
pub use validate::{validate, Validator};
