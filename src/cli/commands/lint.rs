//! Lint command implementation.
//!
//! The `env-sentinel lint` command checks the env file line by line.

use crate::cli::args::LintArgs;
use crate::config::LintSettings;
use crate::error::{Result, SentinelError};
use crate::lint::Linter;
use crate::output::OutputFormat;
use crate::parser::read_env_file;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, InputPaths, EXIT_FINDINGS, EXIT_MISSING_INPUT};
use super::display::show_report;

/// The lint command implementation.
pub struct LintCommand {
    paths: InputPaths,
    args: LintArgs,
    settings: LintSettings,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(paths: InputPaths, args: LintArgs, settings: LintSettings) -> Self {
        Self {
            paths,
            args,
            settings,
        }
    }

    fn linter(&self) -> Linter {
        let mut linter = Linter::with_builtins();
        for name in &self.settings.disable {
            linter.disable(name.as_str());
        }
        linter
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let content = match read_env_file(&self.paths.env_file) {
            Ok(content) => content,
            Err(e @ SentinelError::EnvFileNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_MISSING_INPUT));
            }
            Err(e) => return Err(e),
        };

        let linter = self.linter();
        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "Linting {} with {} checks",
                self.paths.env_label,
                linter.check_names().len()
            ));
        }

        let report = linter.lint(&content);
        show_report(ui, &report, &self.paths.env_label, self.args.format);

        let strict = self.args.strict || self.settings.strict;
        let should_fail = !report.is_valid || (strict && report.has_warnings());

        if report.issues.is_empty() && self.args.format == OutputFormat::Human {
            ui.success(&format!("No lint issues found in {}", self.paths.env_label));
        }

        if should_fail {
            Ok(CommandResult::failure(EXIT_FINDINGS))
        } else {
            Ok(CommandResult::success())
        }
    }
}
