//! Schema document parsing.
//!
//! A schema document pairs each key with a rule-string:
//!
//! ```text
//! # @section: Database
//! # @description: Connection settings.
//!
//! # @var: Database port
//! # @example: 5432
//! DB_PORT=required|number|min:1|max:65535|default:"5432"
//! ```
//!
//! Comment directives and inline `desc:"…"`, `example:"…"` and
//! `default:"…"` tokens become [`SchemaMetadata`]; everything else in the
//! rule-string is kept verbatim for the validation pipeline.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::split_lines;
use crate::error::{DocumentKind, Result};
use crate::reference::{has_reference, resolve_references};

static INLINE_DESC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\|)\s*desc:"([^"]*)""#).unwrap());
static INLINE_EXAMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\|)\s*example:"([^"]*)""#).unwrap());
static INLINE_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\|)\s*default:"([^"]*)""#).unwrap());
static REPEATED_PIPES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\|\|+").unwrap());
static SEPARATOR_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[=\-_*]+$").unwrap());

const TAG_SECTION: &str = "@section";
const TAG_DESCRIPTION: &str = "@description";
const TAG_VAR: &str = "@var";
const TAG_EXAMPLE: &str = "@example";

/// Documentation attached to a schema entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMetadata {
    pub description: Option<String>,
    pub example: Option<String>,
    pub default: Option<String>,
    pub section: Option<String>,
    pub section_description: Option<String>,
}

impl SchemaMetadata {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.example.is_none()
            && self.default.is_none()
            && self.section.is_none()
            && self.section_description.is_none()
    }
}

/// One declared schema key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub key: String,
    /// Pipe-joined rule tokens, e.g. `required|min:3`.
    pub rule: String,
    pub metadata: SchemaMetadata,
    /// 1-based line of the declaration, when parsed from a document.
    pub line: Option<usize>,
}

impl SchemaEntry {
    /// Create an entry with no metadata.
    pub fn new(key: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rule: rule.into(),
            metadata: SchemaMetadata::default(),
            line: None,
        }
    }
}

/// A `@section` declared in a schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSection {
    pub name: String,
    pub description: Option<String>,
    /// 1-based line of the `@section` directive.
    pub line: usize,
}

/// A parsed schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Entries with references resolved. Entries that contained a
    /// reference follow the plain ones.
    pub entries: Vec<SchemaEntry>,
    /// Declared sections in document order, including empty ones.
    pub sections: Vec<SchemaSection>,
}

/// Comment block currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    /// The previous line opened a section.
    SectionOpened,
    SectionDescription,
    VarDescription,
}

#[derive(Debug, Default)]
struct PendingDocs {
    description: Vec<String>,
    example: Option<String>,
}

impl PendingDocs {
    fn take(&mut self) -> (Option<String>, Option<String>) {
        let docs = std::mem::take(self);
        let description = (!docs.description.is_empty()).then(|| docs.description.join("\n"));
        (description, docs.example)
    }
}

#[derive(Debug, Default)]
struct SectionState {
    name: Option<String>,
    description: Vec<String>,
    line: usize,
}

impl SectionState {
    fn finish(self) -> Option<SchemaSection> {
        let name = self.name?;
        Some(SchemaSection {
            name,
            description: (!self.description.is_empty()).then(|| self.description.join("\n")),
            line: self.line,
        })
    }
}

/// Text after a directive tag, with an optional leading `:` removed.
///
/// The tag must be followed by `:`, whitespace or the end of the comment,
/// so `@variable` does not match `@var`.
fn tag_argument<'a>(content: &'a str, tag: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(tag)?;
    if !(rest.is_empty() || rest.starts_with(':') || rest.starts_with(char::is_whitespace)) {
        return None;
    }
    let rest = rest.trim();
    Some(rest.strip_prefix(':').map(str::trim).unwrap_or(rest))
}

/// Pull an inline `name:"…"` token out of a rule-string.
fn extract_inline(regex: &Regex, rule: &str) -> Option<String> {
    regex.captures(rule).map(|caps| caps[1].to_string())
}

/// Remove inline metadata tokens and tidy the pipes they leave behind.
fn strip_inline_metadata(rule: &str) -> String {
    let mut cleaned = rule.to_string();
    for regex in [&*INLINE_DESC, &*INLINE_EXAMPLE, &*INLINE_DEFAULT] {
        cleaned = regex.replace_all(&cleaned, "").into_owned();
    }
    let cleaned = REPEATED_PIPES.replace_all(&cleaned, "|");
    cleaned.trim().trim_matches('|').trim().to_string()
}

/// Parse a schema document into entries in declaration order.
///
/// Rule-strings containing a reference are resolved after every plain
/// rule-string has been read: the reference is replaced by the referenced
/// entry's rule-string.
///
/// # Errors
///
/// Returns [`SentinelError::ReferenceNotFound`](crate::error::SentinelError::ReferenceNotFound)
/// naming the schema when a reference cannot be resolved.
///
/// # Example
///
/// ```
/// use env_sentinel::parser::parse_schema_content;
///
/// let entries = parse_schema_content("PORT=required|number\nALT_PORT=${PORT}").unwrap();
/// assert_eq!(entries[1].key, "ALT_PORT");
/// assert_eq!(entries[1].rule, "required|number");
/// ```
pub fn parse_schema_content(content: &str) -> Result<Vec<SchemaEntry>> {
    parse_schema_document(content).map(|document| document.entries)
}

/// Parse a schema document, keeping its declared sections.
///
/// # Errors
///
/// Same as [`parse_schema_content`].
///
/// # Example
///
/// ```
/// use env_sentinel::parser::parse_schema_document;
///
/// let document = parse_schema_document("# @section: Cache\n# @section: Server\nPORT=number").unwrap();
/// assert_eq!(document.sections.len(), 2);
/// assert_eq!(document.entries[0].line, Some(3));
/// ```
pub fn parse_schema_document(content: &str) -> Result<SchemaDocument> {
    let mut sections: Vec<SchemaSection> = Vec::new();
    let mut entries: Vec<SchemaEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut pending: Vec<SchemaEntry> = Vec::new();

    let mut section = SectionState::default();
    let mut docs = PendingDocs::default();
    let mut block = Block::None;

    for (index, line) in split_lines(content).enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            block = Block::None;
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            let content = comment.trim();

            if let Some(name) = tag_argument(content, TAG_SECTION) {
                if name.is_empty() {
                    warn!(line = index + 1, "Ignoring @section with an empty name");
                    block = Block::None;
                } else {
                    let opened = SectionState {
                        name: Some(name.to_string()),
                        description: Vec::new(),
                        line: index + 1,
                    };
                    sections.extend(std::mem::replace(&mut section, opened).finish());
                    block = Block::SectionOpened;
                }
            } else if let Some(first) = tag_argument(content, TAG_DESCRIPTION) {
                let target = if block == Block::SectionOpened {
                    section.description.clear();
                    &mut section.description
                } else {
                    docs.description.clear();
                    &mut docs.description
                };
                if !first.is_empty() {
                    target.push(first.to_string());
                }
                block = if block == Block::SectionOpened {
                    Block::SectionDescription
                } else {
                    Block::VarDescription
                };
            } else if let Some(first) = tag_argument(content, TAG_VAR) {
                docs = PendingDocs::default();
                if !first.is_empty() {
                    docs.description.push(first.to_string());
                }
                block = Block::VarDescription;
            } else if let Some(example) = tag_argument(content, TAG_EXAMPLE) {
                docs.example = Some(example.to_string());
                if block != Block::VarDescription {
                    block = Block::None;
                }
            } else if content.starts_with('@') {
                block = Block::None;
            } else if SEPARATOR_LINE.is_match(content) {
                // Decoration inside a description block.
            } else {
                match block {
                    Block::SectionDescription => section.description.push(content.to_string()),
                    Block::VarDescription => docs.description.push(content.to_string()),
                    Block::SectionOpened | Block::None => block = Block::None,
                }
            }
            continue;
        }

        block = Block::None;

        let Some((key, raw_rule)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let raw_rule = raw_rule.trim();

        let (description, example) = docs.take();
        let metadata = SchemaMetadata {
            description: extract_inline(&INLINE_DESC, raw_rule).or(description),
            example: extract_inline(&INLINE_EXAMPLE, raw_rule).or(example),
            default: extract_inline(&INLINE_DEFAULT, raw_rule),
            section: section.name.clone(),
            section_description: (!section.description.is_empty())
                .then(|| section.description.join("\n")),
        };
        let entry = SchemaEntry {
            key: key.to_string(),
            rule: strip_inline_metadata(raw_rule),
            metadata,
            line: Some(index + 1),
        };

        pending.retain(|p| p.key != entry.key);
        if has_reference(&entry.rule) {
            pending.push(entry);
        } else {
            upsert(&mut entries, &mut positions, entry);
        }
    }

    sections.extend(section.finish());

    debug!(
        resolved = entries.len(),
        pending = pending.len(),
        sections = sections.len(),
        "Parsed schema document"
    );

    for mut entry in pending {
        entry.rule = resolve_references(&entry.rule, DocumentKind::Schema, |name| {
            positions.get(name).map(|&i| entries[i].rule.as_str())
        })?;
        upsert(&mut entries, &mut positions, entry);
    }

    Ok(SchemaDocument { entries, sections })
}

/// Insert an entry, replacing an earlier one with the same key in place.
fn upsert(
    entries: &mut Vec<SchemaEntry>,
    positions: &mut HashMap<String, usize>,
    entry: SchemaEntry,
) {
    match positions.get(&entry.key) {
        Some(&i) => entries[i] = entry,
        None => {
            positions.insert(entry.key.clone(), entries.len());
            entries.push(entry);
        }
    }
}
