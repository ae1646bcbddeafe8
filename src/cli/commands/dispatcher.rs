//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands, ValidateArgs};
use crate::config::{load_config, SentinelConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for lint findings or failed validation.
pub const EXIT_FINDINGS: i32 = 1;

/// Exit code when the env or schema file is missing.
pub const EXIT_MISSING_INPUT: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Env and schema file locations for one invocation.
///
/// `env_label` and `schema_label` are the paths as the user gave them and
/// appear in output; `env_file` and `schema_file` are resolved against the
/// project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub env_file: PathBuf,
    pub env_label: String,
    pub schema_file: PathBuf,
    pub schema_label: String,
}

impl InputPaths {
    /// Resolve paths from CLI flags, falling back to the project config.
    pub fn resolve(
        project_root: &Path,
        cli_env: Option<&Path>,
        cli_schema: Option<&Path>,
        config: &SentinelConfig,
    ) -> Self {
        let env = cli_env.unwrap_or(config.env_file.as_path());
        let schema = cli_schema.unwrap_or(config.schema_file.as_path());
        Self {
            env_file: project_root.join(env),
            env_label: env.display().to_string(),
            schema_file: project_root.join(schema),
            schema_label: schema.display().to_string(),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Loads the project config, resolves the input paths and routes the
    /// CLI subcommand to the appropriate command implementation.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let paths = InputPaths::resolve(
            &self.project_root,
            cli.env_file.as_deref(),
            cli.schema.as_deref(),
            &config,
        );
        debug!(?paths, "Resolved input paths");

        match &cli.command {
            Some(Commands::Lint(args)) => {
                let cmd = super::lint::LintCommand::new(paths, args.clone(), config.lint.clone());
                cmd.execute(ui)
            }
            Some(Commands::Validate(args)) => {
                let cmd = super::validate::ValidateCommand::new(paths, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(paths, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Docs(args)) => {
                let cmd = super::docs::DocsCommand::new(&self.project_root, paths, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to validate with default args
                let cmd = super::validate::ValidateCommand::new(paths, ValidateArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
