//! Docs command implementation.
//!
//! The `env-sentinel docs` command renders the schema's documentation
//! metadata as Markdown.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::DocsArgs;
use crate::error::{Result, SentinelError};
use crate::generate::{build_sections, generate_docs_markdown};
use crate::parser::{parse_schema_document, read_schema_file};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, InputPaths, EXIT_FINDINGS, EXIT_MISSING_INPUT};
use super::validate::INIT_HINT;

/// The docs command implementation.
pub struct DocsCommand {
    project_root: PathBuf,
    paths: InputPaths,
    args: DocsArgs,
}

impl DocsCommand {
    /// Create a new docs command.
    pub fn new(project_root: &Path, paths: InputPaths, args: DocsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            paths,
            args,
        }
    }
}

impl Command for DocsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let content = match read_schema_file(&self.paths.schema_file) {
            Ok(content) => content,
            Err(e @ SentinelError::SchemaFileNotFound { .. }) => {
                ui.error(&e.to_string());
                ui.hint(INIT_HINT);
                return Ok(CommandResult::failure(EXIT_MISSING_INPUT));
            }
            Err(e) => return Err(e),
        };

        let document = match parse_schema_document(&content) {
            Ok(document) => document,
            Err(e @ SentinelError::ReferenceNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FINDINGS));
            }
            Err(e) => return Err(e),
        };

        let sections = build_sections(&document);
        let markdown = generate_docs_markdown(&sections);

        let target = self.project_root.join(&self.args.output);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, markdown)?;

        ui.success(&format!(
            "Documentation generated: {}",
            self.args.output.display()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SentinelConfig;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(temp: &TempDir, output: &str) -> (CommandResult, MockUI) {
        let paths = InputPaths::resolve(temp.path(), None, None, &SentinelConfig::default());
        let args = DocsArgs {
            output: PathBuf::from(output),
        };
        let mut ui = MockUI::new();
        let result = DocsCommand::new(temp.path(), paths, args)
            .execute(&mut ui)
            .unwrap();
        (result, ui)
    }

    #[test]
    fn writes_markdown_from_schema() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".env-sentinel"),
            "# @section: Server\n# @var: Listening port\nPORT=required|number|min:1\n",
        )
        .unwrap();

        let (result, ui) = run(&temp, "docs/env.md");
        assert!(result.success);
        assert_eq!(ui.successes(), ["Documentation generated: docs/env.md"]);

        let markdown = fs::read_to_string(temp.path().join("docs/env.md")).unwrap();
        assert!(markdown.contains("## Server"));
        assert!(markdown.contains("| `PORT` | Listening port | `number` | Yes | - | Min: 1 |"));
    }

    #[test]
    fn declared_sections_render_in_document_order() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".env-sentinel"),
            "# @section: Empty\n# @section: One\nA=${B}\n# @section: Two\nB=string\n",
        )
        .unwrap();

        let (result, _) = run(&temp, "ENVIRONMENT.md");
        assert!(result.success);

        let markdown = fs::read_to_string(temp.path().join("ENVIRONMENT.md")).unwrap();
        assert!(markdown.contains("- [Empty](#empty)\n- [One](#one)\n- [Two](#two)"));
        assert!(markdown.contains("## Empty\n\n*No variables in this section.*"));
    }

    #[test]
    fn missing_schema() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, "ENVIRONMENT.md");
        assert_eq!(result.exit_code, EXIT_MISSING_INPUT);
        assert!(ui.has_error("Schema file not found"));
        assert!(!temp.path().join("ENVIRONMENT.md").exists());
    }
}
