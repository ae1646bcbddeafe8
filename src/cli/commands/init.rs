//! Init command implementation.
//!
//! The `env-sentinel init` command writes a starter schema file, inferred
//! from the env file when one exists.

use crate::cli::args::InitArgs;
use crate::error::{Result, SentinelError};
use crate::generate::{generate_schema_from_env, write_schema, DEFAULT_SCHEMA};
use crate::lint::lint;
use crate::parser::read_env_file;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, InputPaths};

/// The init command implementation.
pub struct InitCommand {
    paths: InputPaths,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(paths: InputPaths, args: InitArgs) -> Self {
        Self { paths, args }
    }

    /// The schema to write and the message describing where it came from.
    fn build_schema(&self) -> Result<(String, Inferred)> {
        match read_env_file(&self.paths.env_file) {
            Ok(content) => {
                let report = lint(&content);
                let schema = generate_schema_from_env(&content, &self.paths.env_label, &report);
                Ok((schema, Inferred::FromEnv))
            }
            Err(SentinelError::EnvFileNotFound { .. }) => {
                Ok((DEFAULT_SCHEMA.to_string(), Inferred::Template))
            }
            Err(e) => Err(e),
        }
    }
}

enum Inferred {
    FromEnv,
    Template,
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (schema, inferred) = self.build_schema()?;

        match write_schema(&self.paths.schema_file, &schema, self.args.force) {
            Ok(()) => {}
            Err(SentinelError::AlreadyInitialized { .. }) => {
                ui.warning(&format!(
                    "Project already initialized, {} file already exists.",
                    self.paths.schema_label
                ));
                ui.warning("Use --force to overwrite it or edit it manually.");
                return Ok(CommandResult::success());
            }
            Err(e) => return Err(e),
        }

        match inferred {
            Inferred::FromEnv => {
                ui.success(&format!("Schema inferred from {}", self.paths.env_label))
            }
            Inferred::Template => ui.warning(&format!(
                "{} not found, using default template.",
                self.paths.env_label
            )),
        }
        ui.success(&format!("{} created!", self.paths.schema_label));
        Ok(CommandResult::success())
    }
}
