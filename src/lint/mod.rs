//! Env document linting.
//!
//! The lint system checks every line of an env document independently
//! and reports style and safety issues.
//!
//! # Overview
//!
//! - **Checks** - Individual line checks ([`LintCheck`] trait)
//! - **Linter** - Ordered registry of checks plus globally disabled names ([`Linter`])
//! - **Directives** - `# es-disable:` comments that silence checks on the next line
//!
//! # Example
//!
//! ```
//! use env_sentinel::lint::Linter;
//! use env_sentinel::Severity;
//!
//! let report = Linter::with_builtins().lint("DB_HOST=");
//! assert!(report.is_valid);
//! assert_eq!(report.issues[0].severity, Severity::Warning);
//! ```

pub mod check;
pub mod checks;
pub mod directives;
pub mod engine;

pub use check::{Finding, FnCheck, LintCheck, LintContext};
pub use directives::DisableDirectives;
pub use engine::{lint, Linter};
