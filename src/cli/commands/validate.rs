//! Validate command implementation.
//!
//! The `env-sentinel validate` command (also `check`, and the default when
//! no command is given) validates the env file against the schema.

use crate::cli::args::ValidateArgs;
use crate::error::{Result, SentinelError};
use crate::output::OutputFormat;
use crate::parser::{parse_env_content, parse_schema_content, read_env_file, read_schema_file};
use crate::ui::UserInterface;
use crate::validate::Validator;

use super::dispatcher::{Command, CommandResult, InputPaths, EXIT_FINDINGS, EXIT_MISSING_INPUT};
use super::display::show_report;

/// Hint shown when the schema file is missing.
pub const INIT_HINT: &str = "Hint: You can generate a template by running 'env-sentinel init'";

/// The validate command implementation.
pub struct ValidateCommand {
    paths: InputPaths,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(paths: InputPaths, args: ValidateArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env_content = match read_env_file(&self.paths.env_file) {
            Ok(content) => content,
            Err(e @ SentinelError::EnvFileNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_MISSING_INPUT));
            }
            Err(e) => return Err(e),
        };
        let schema_content = match read_schema_file(&self.paths.schema_file) {
            Ok(content) => content,
            Err(e @ SentinelError::SchemaFileNotFound { .. }) => {
                ui.error(&e.to_string());
                ui.hint(INIT_HINT);
                return Ok(CommandResult::failure(EXIT_MISSING_INPUT));
            }
            Err(e) => return Err(e),
        };

        let parsed = parse_env_content(&env_content)
            .and_then(|env| Ok((env, parse_schema_content(&schema_content)?)));
        let (env, schema) = match parsed {
            Ok(parsed) => parsed,
            Err(e @ SentinelError::ReferenceNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FINDINGS));
            }
            Err(e) => return Err(e),
        };

        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "Validating {} ({} variables) against {} ({} rules)",
                self.paths.env_label,
                env.len(),
                self.paths.schema_label,
                schema.len()
            ));
        }

        let report = Validator::with_builtins().validate(&env, &schema, Some(&env_content));
        show_report(ui, &report, &self.paths.env_label, self.args.format);

        let human = self.args.format == OutputFormat::Human;
        if report.is_valid {
            if human {
                ui.success("Environment validation passed!");
            }
            Ok(CommandResult::success())
        } else {
            if human {
                ui.error("Environment validation failed.");
            }
            Ok(CommandResult::failure(EXIT_FINDINGS))
        }
    }
}
