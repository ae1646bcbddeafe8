//! Env and schema document parsing.
//!
//! Both parsers take raw text and never touch the filesystem; the
//! [`read_env_file`] and [`read_schema_file`] helpers load the text and map a
//! missing file to the matching [`SentinelError`].

pub mod env;
pub mod schema;

use std::path::Path;

use crate::error::{Result, SentinelError};

pub use env::{parse_env_content, EnvMap};
pub use schema::{
    parse_schema_content, parse_schema_document, SchemaDocument, SchemaEntry, SchemaMetadata,
    SchemaSection,
};

/// Read an env document from disk.
pub fn read_env_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SentinelError::EnvFileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Read a schema document from disk.
pub fn read_schema_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SentinelError::SchemaFileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Split document text on `\n` / `\r\n` line terminators.
pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Strip one pair of matching surrounding quotes.
pub(crate) fn strip_matching_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
