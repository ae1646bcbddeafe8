//! Error types for env-sentinel operations.
//!
//! This module defines [`SentinelError`], the error type for hard failures
//! that abort an operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Hard failures (missing files, unresolvable references) are `SentinelError`s
//! - Lint and validation findings are never errors; they are collected as
//!   [`Issue`](crate::report::Issue)s inside a [`Report`](crate::report::Report)
//! - Use `anyhow::Error` (via `SentinelError::Other`) for unexpected errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which kind of document a reference was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A `.env` document (`KEY=value`).
    Env,
    /// A schema document (`KEY=rule|rule`).
    Schema,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Env => write!(f, "env"),
            DocumentKind::Schema => write!(f, "schema"),
        }
    }
}

/// Core error type for env-sentinel operations.
#[derive(Debug, Error)]
pub enum SentinelError {
    /// The env file to lint or validate does not exist.
    #[error(".env file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// The schema file does not exist.
    #[error("Schema file not found: {path}")]
    SchemaFileNotFound { path: PathBuf },

    /// A `${VAR}` style reference names a key that is not defined.
    #[error("Referenced key \"{key}\" not found in the {origin}.")]
    ReferenceNotFound { key: String, origin: DocumentKind },

    /// `init` would overwrite an existing schema file.
    #[error("Project already initialized: {path} already exists. Use --force to overwrite it or edit it manually.")]
    AlreadyInitialized { path: PathBuf },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for env-sentinel operations.
pub type Result<T> = std::result::Result<T, SentinelError>;
