//! Keys that collide with system, runtime or CI variables.

use super::{split_at_equals, strip_key_quotes};
use crate::lint::{Finding, LintCheck, LintContext};

/// Variable names that alter runtimes, shadow system settings, or mimic CI.
const UNSAFE_KEYS: &[&str] = &[
    // Runtime manipulation
    "NODE_OPTIONS",
    "LD_PRELOAD",
    "PYTHONPATH",
    "GEM_HOME",
    "GEM_PATH",
    // System
    "PATH",
    "HOME",
    "SHELL",
    "TERM",
    "LANG",
    "TMPDIR",
    "PWD",
    "OLDPWD",
    "USER",
    "LOGNAME",
    "DISPLAY",
    "XAUTHORITY",
    // CI/CD
    "CI",
    "GITHUB_ACTIONS",
    "TRAVIS",
    "CIRCLECI",
    "APPVEYOR",
    "GITLAB_CI",
    "BUILD_ID",
    "RUNNER_NAME",
    "CI_COMMIT_SHA",
    // Debug toggles
    "DEBUG",
    "VERBOSE",
    "TEST",
];

/// Flags keys on the deny-list, compared case-insensitively.
pub struct NoUnsafeKey;

impl LintCheck for NoUnsafeKey {
    fn name(&self) -> &str {
        "no-unsafe-key"
    }

    fn run(&self, _line_number: usize, line: &str, _ctx: &mut LintContext) -> Option<Finding> {
        let (raw_key, _) = split_at_equals(line)?;
        let key = strip_key_quotes(raw_key.trim());
        if key.is_empty() {
            return None;
        }

        let upper = key.to_uppercase();
        UNSAFE_KEYS.contains(&upper.as_str()).then(|| {
            Finding::error(format!(
                "Variable \"{key}\" is discouraged due to potential security or system conflicts"
            ))
        })
    }
}
