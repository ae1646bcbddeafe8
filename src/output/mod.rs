//! Report output formatters.
//!
//! This module provides formatters for writing a [`Report`] in different
//! formats (human-readable, JSON). Both lint and validation reports use them.

pub mod human;
pub mod json;

use std::io::Write;

use crate::report::Report;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting report output.
pub trait ReportFormatter {
    /// Format `report` for the document at `source` to the given writer.
    fn format<W: Write>(&self, report: &Report, source: &str, writer: &mut W)
        -> std::io::Result<()>;
}

pub use human::{format_issue, format_summary, HumanFormatter};
pub use json::JsonFormatter;
