//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! project config, resolves the env and schema paths once and routes CLI
//! subcommands to their implementations.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod docs;
pub mod init;
pub mod lint;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, InputPaths};
