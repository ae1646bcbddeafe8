//! Documentation model built from schema entries.

use crate::parser::{SchemaDocument, SchemaEntry};
use crate::validate::{parse_rule_string, ParsedRule};

/// Section that collects entries declared before any `@section`.
pub const DEFAULT_SECTION: &str = "General";

/// A documented group of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsSection {
    pub name: String,
    pub description: Option<String>,
    pub variables: Vec<DocsVariable>,
}

/// A documented variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsVariable {
    pub key: String,
    pub description: Option<String>,
    pub example: Option<String>,
    pub rules: Vec<ParsedRule>,
    pub default: Option<String>,
}

impl DocsVariable {
    /// Whether a rule with `name` is attached.
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name == name)
    }

    /// First rule named `name`.
    pub fn rule(&self, name: &str) -> Option<&ParsedRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

impl From<&SchemaEntry> for DocsVariable {
    fn from(entry: &SchemaEntry) -> Self {
        Self {
            key: entry.key.clone(),
            description: entry.metadata.description.clone(),
            example: entry.metadata.example.clone(),
            rules: parse_rule_string(&entry.rule),
            default: entry.metadata.default.clone(),
        }
    }
}

/// Group a schema's entries into sections in document order.
///
/// Every declared `@section` appears, even without variables, and keeps the
/// first non-empty description declared for its name. Entries declared
/// before any `@section` form the leading `General` section. Variables are
/// ordered by the line they were declared on.
pub fn build_sections(schema: &SchemaDocument) -> Vec<DocsSection> {
    let mut sections: Vec<DocsSection> = Vec::new();

    if schema.entries.iter().any(|e| e.metadata.section.is_none()) {
        sections.push(DocsSection {
            name: DEFAULT_SECTION.to_string(),
            description: None,
            variables: Vec::new(),
        });
    }

    for declared in &schema.sections {
        match sections.iter_mut().find(|s| s.name == declared.name) {
            Some(existing) => {
                if existing.description.is_none() {
                    existing.description = declared.description.clone();
                }
            }
            None => sections.push(DocsSection {
                name: declared.name.clone(),
                description: declared.description.clone(),
                variables: Vec::new(),
            }),
        }
    }

    let mut entries: Vec<&SchemaEntry> = schema.entries.iter().collect();
    entries.sort_by_key(|e| e.line.unwrap_or(usize::MAX));

    for entry in entries {
        let name = entry
            .metadata
            .section
            .as_deref()
            .unwrap_or(DEFAULT_SECTION);

        let index = match sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                sections.push(DocsSection {
                    name: name.to_string(),
                    description: entry.metadata.section_description.clone(),
                    variables: Vec::new(),
                });
                sections.len() - 1
            }
        };
        sections[index].variables.push(DocsVariable::from(entry));
    }

    sections
}
