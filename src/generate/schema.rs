//! Starter schema generation for `init`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::infer::infer_type;
use crate::error::{Result, SentinelError};
use crate::lint::directives::is_blank_or_comment;
use crate::parser::{parse_env_content, split_lines, EnvMap};
use crate::report::Report;

/// Template written when there is no env document to infer from.
pub const DEFAULT_SCHEMA: &str = r#"# env-sentinel schema
#
# Each line declares a variable and its rules, separated by "|":
#   required          the variable must be set and non-empty
#   number            numeric value
#   boolean           true or false
#   string            any value
#   min:N / max:N     numeric bounds, or length bounds for text
#   enum:a,b,c        one of the listed values
#   secure            strong secret (mixed case, digit, symbol, no spaces)

# @section: Application
# @description: General application settings.

# @var: Runtime environment
NODE_ENV=required|enum:development,production,test|default:"development"

# @var: HTTP port the server listens on
# @example: 3000
PORT=required|number|min:1|max:65535

# @var: Enable verbose logging
DEBUG=boolean|default:"false"

# @section: Security

# @var: Secret used to sign sessions
SECRET_KEY=required|secure|min:32
"#;

/// Generate a schema from an env document.
///
/// Every assignment becomes `KEY=required`, with the inferred type appended
/// when the value looks like a boolean or a number. References are resolved
/// before inference. Assignments with an empty key or value are skipped, as
/// are lines that carry an error in `lint_report`.
///
/// # Example
///
/// ```
/// use env_sentinel::generate::generate_schema_from_env;
/// use env_sentinel::lint::lint;
///
/// let content = "PORT=3000\nDEBUG=true\nAPP_NAME=my-app\n";
/// let schema = generate_schema_from_env(content, ".env", &lint(content));
/// assert_eq!(
///     schema,
///     "# Generated from .env\nPORT=required|number\nDEBUG=required|boolean\nAPP_NAME=required\n"
/// );
/// ```
pub fn generate_schema_from_env(content: &str, source: &str, lint_report: &Report) -> String {
    let error_lines: HashSet<usize> = lint_report.error_lines().collect();
    let resolved = match parse_env_content(content) {
        Ok(env) => env,
        Err(e) => {
            warn!("Inferring types from raw values: {e}");
            EnvMap::new()
        }
    };

    let mut schema = format!("# Generated from {source}\n");
    for (index, line) in split_lines(content).enumerate() {
        if is_blank_or_comment(line) || error_lines.contains(&(index + 1)) {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }

        let sample = resolved.get(key).unwrap_or(value);
        match infer_type(sample) {
            Some(kind) => schema.push_str(&format!("{key}=required|{kind}\n")),
            None => schema.push_str(&format!("{key}=required\n")),
        }
    }

    debug!(source, "Generated schema from env document");
    schema
}

/// Write a schema file, refusing to replace an existing one unless `force`.
pub fn write_schema(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(SentinelError::AlreadyInitialized {
            path: path.to_path_buf(),
        });
    }
    fs::write(path, content)?;
    Ok(())
}
