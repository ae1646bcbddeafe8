//! Schema and documentation generation.
//!
//! - [`schema`] - Infer a starter schema from an existing env document
//! - [`docs`] - Group schema entries into documentation sections
//! - [`markdown`] - Render sections as Markdown

pub mod docs;
pub mod infer;
pub mod markdown;
pub mod schema;

pub use docs::{build_sections, DocsSection, DocsVariable};
pub use infer::{infer_type, InferredType};
pub use markdown::generate_docs_markdown;
pub use schema::{generate_schema_from_env, write_schema, DEFAULT_SCHEMA};
