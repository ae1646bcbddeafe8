//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// env-sentinel - Lint, validate and document .env files.
#[derive(Debug, Parser)]
#[command(name = "env-sentinel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the env file (default: .env)
    #[arg(short = 'f', long, global = true, env = "ENV_SENTINEL_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Path to the schema file (default: .env-sentinel)
    #[arg(short, long, global = true, env = "ENV_SENTINEL_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the env file for style and safety issues
    Lint(LintArgs),

    /// Validate the env file against the schema (default if no command specified)
    #[command(alias = "check")]
    Validate(ValidateArgs),

    /// Create a schema file, inferred from the env file when it exists
    Init(InitArgs),

    /// Generate Markdown documentation from the schema
    Docs(DocsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing schema file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `docs` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DocsArgs {
    /// Where to write the Markdown file
    #[arg(short, long, default_value = DEFAULT_DOCS_OUTPUT)]
    pub output: PathBuf,
}

/// Default output path of the `docs` command.
pub const DEFAULT_DOCS_OUTPUT: &str = "ENVIRONMENT.md";

impl Default for DocsArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_DOCS_OUTPUT),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
