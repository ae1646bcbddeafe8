//! Markdown rendering of documentation sections.

use std::sync::LazyLock;

use regex::Regex;

use super::docs::{DocsSection, DocsVariable, DEFAULT_SECTION};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const TYPE_RULES: [&str; 3] = ["number", "boolean", "string"];

/// Render sections as a Markdown document.
///
/// Section headers and the table of contents appear unless the only section
/// is the default `General` one.
pub fn generate_docs_markdown(sections: &[DocsSection]) -> String {
    let mut lines: Vec<String> = vec![
        "# Environment Variables Configuration".into(),
        String::new(),
        "This document describes all environment variables used in this application.".into(),
        String::new(),
    ];

    if sections.is_empty() {
        lines.push("No documented variables found.".into());
        return lines.join("\n");
    }

    let show_headers = sections.len() > 1 || sections[0].name != DEFAULT_SECTION;

    if show_headers {
        lines.push("## Table of Contents".into());
        lines.push(String::new());
        for section in sections {
            lines.push(format!("- [{}](#{})", section.name, anchor(&section.name)));
        }
        lines.push(String::new());
        lines.push("---".into());
        lines.push(String::new());
    }

    for section in sections {
        render_section(section, show_headers, &mut lines);
    }

    lines.join("\n")
}

fn anchor(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

fn render_section(section: &DocsSection, show_header: bool, lines: &mut Vec<String>) {
    if show_header {
        lines.push(format!("## {}", section.name));
        lines.push(String::new());
        if let Some(description) = section.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(description.to_string());
            lines.push(String::new());
        }
    }

    if section.variables.is_empty() {
        if show_header {
            lines.push("*No variables in this section.*".into());
            lines.push(String::new());
        }
        return;
    }

    let with_description = section
        .variables
        .iter()
        .any(|v| v.description.as_deref().is_some_and(|d| !d.is_empty()));

    if with_description {
        lines.push("| Variable | Description | Type | Required | Default | Constraints |".into());
        lines.push("|----------|-------------|------|----------|---------|-------------|".into());
    } else {
        lines.push("| Variable | Type | Required | Default | Constraints |".into());
        lines.push("|----------|------|----------|---------|-------------|".into());
    }

    for variable in &section.variables {
        lines.push(render_row(variable, with_description));
    }
    lines.push(String::new());
}

fn render_row(variable: &DocsVariable, with_description: bool) -> String {
    let name = if variable.has_rule("secure") {
        format!("🔒 `{}`", variable.key)
    } else {
        format!("`{}`", variable.key)
    };
    let kind = format!("`{}`", variable_type(variable));
    let required = if variable.has_rule("required") { "Yes" } else { "No" };
    let default = match variable.default.as_deref() {
        Some(value) if !value.is_empty() => format!("`{value}`"),
        _ => "-".to_string(),
    };
    let constraints = constraints(variable);
    let constraints = if constraints.is_empty() {
        "-".to_string()
    } else {
        constraints.join("<br>")
    };

    if with_description {
        let description = match variable.description.as_deref() {
            Some(text) if !text.is_empty() => text.replace('\n', "<br>"),
            _ => "-".to_string(),
        };
        format!("| {name} | {description} | {kind} | {required} | {default} | {constraints} |")
    } else {
        format!("| {name} | {kind} | {required} | {default} | {constraints} |")
    }
}

fn variable_type(variable: &DocsVariable) -> &str {
    if let Some(rule) = variable
        .rules
        .iter()
        .find(|rule| TYPE_RULES.contains(&rule.name.as_str()))
    {
        return &rule.name;
    }
    if variable.has_rule("enum") {
        "enum"
    } else {
        "string"
    }
}

fn constraints(variable: &DocsVariable) -> Vec<String> {
    let mut constraints = Vec::new();
    if let Some(min) = variable.rule("min").and_then(|r| r.args.first()) {
        constraints.push(format!("Min: {min}"));
    }
    if let Some(max) = variable.rule("max").and_then(|r| r.args.first()) {
        constraints.push(format!("Max: {max}"));
    }
    if let Some(allowed) = variable.rule("enum").filter(|r| !r.args.is_empty()) {
        constraints.push(format!("Allowed: {}", allowed.args.join(", ")));
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::parse_rule_string;

    fn variable(key: &str, rule: &str) -> DocsVariable {
        DocsVariable {
            key: key.to_string(),
            description: None,
            example: None,
            rules: parse_rule_string(rule),
            default: None,
        }
    }

    fn section(name: &str, variables: Vec<DocsVariable>) -> DocsSection {
        DocsSection {
            name: name.to_string(),
            description: None,
            variables,
        }
    }

    #[test]
    fn named_section_gets_toc_and_header() {
        let mut host = variable("DB_HOST", "required");
        host.description = Some("Database hostname".into());
        let mut database = section("Database", vec![host]);
        database.description = Some("Database settings".into());

        let md = generate_docs_markdown(&[database]);
        assert!(md.starts_with("# Environment Variables Configuration\n\n"));
        assert!(md.contains("## Table of Contents\n\n- [Database](#database)\n\n---\n"));
        assert!(md.contains("## Database\n\nDatabase settings\n"));
        assert!(md.contains("| Variable | Description | Type | Required | Default | Constraints |"));
        assert!(md.contains("| `DB_HOST` | Database hostname | `string` | Yes | - | - |"));
    }

    #[test]
    fn lone_general_section_has_no_headers() {
        let md = generate_docs_markdown(&[section("General", vec![variable("A", "required")])]);
        assert!(!md.contains("## Table of Contents"));
        assert!(!md.contains("## General"));
        assert!(md.contains("| Variable | Type | Required | Default | Constraints |"));
        assert!(md.contains("| `A` | `string` | Yes | - | - |"));
    }

    #[test]
    fn description_column_appears_when_any_variable_has_one() {
        let mut host = variable("DB_HOST", "required");
        host.description = Some("Line one\nLine two".into());
        let md = generate_docs_markdown(&[section("Db", vec![host, variable("DB_PORT", "number")])]);
        assert!(md.contains("| `DB_HOST` | Line one<br>Line two | `string` |"));
        assert!(md.contains("| `DB_PORT` | - | `number` |"));
    }

    #[test]
    fn rows_show_lock_type_default_and_constraints() {
        let mut debug = variable("DEBUG", "boolean");
        debug.default = Some("false".into());
        let md = generate_docs_markdown(&[section(
            "App",
            vec![
                variable("API_KEY", "required|secure"),
                debug,
                variable("PORT", "number|min:1|max:65535"),
                variable("NODE_ENV", "enum:dev,prod,test"),
            ],
        )]);

        assert!(md.contains("| 🔒 `API_KEY` | `string` | Yes | - | - |"));
        assert!(md.contains("| `DEBUG` | `boolean` | No | `false` | - |"));
        assert!(md.contains("| `PORT` | `number` | No | - | Min: 1<br>Max: 65535 |"));
        assert!(md.contains("| `NODE_ENV` | `enum` | No | - | Allowed: dev, prod, test |"));
    }

    #[test]
    fn anchors_are_lowercase_and_hyphenated() {
        let md = generate_docs_markdown(&[
            section("Third Party  APIs", vec![variable("A", "")]),
            section("General", vec![variable("B", "")]),
        ]);
        assert!(md.contains("- [Third Party  APIs](#third-party-apis)"));
        assert!(md.contains("## General"));
    }

    #[test]
    fn empty_section_is_marked() {
        let mut empty = section("Empty", vec![]);
        empty.description = Some("Empty section".into());
        let md = generate_docs_markdown(&[empty]);
        assert!(md.contains("## Empty\n\nEmpty section\n\n*No variables in this section.*"));
    }

    #[test]
    fn no_sections() {
        let md = generate_docs_markdown(&[]);
        assert!(md.contains("# Environment Variables Configuration"));
        assert!(md.ends_with("No documented variables found."));
    }
}
