//! Schema-driven validation.
//!
//! Schema rule-strings such as `required|number|min:1|max:65535` are parsed
//! into [`ParsedRule`]s and each rule is looked up in the [`Validator`]'s
//! registry. Built-in rules live in [`validators`].

pub mod engine;
pub mod rule;
pub mod validators;

pub use engine::{validate, Validator};
pub use rule::{parse_rule_string, ParsedRule};
pub use validators::{ValidationOutcome, ValueValidator};
