//! Value type inference.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static BOOLEAN_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(true|false)$").unwrap());
static NUMBER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Rule type inferred from a sample value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferredType {
    Boolean,
    Number,
}

impl InferredType {
    /// Rule name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InferredType::Boolean => "boolean",
            InferredType::Number => "number",
        }
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer a rule type from a value, if it looks like a boolean or a number.
pub fn infer_type(value: &str) -> Option<InferredType> {
    if BOOLEAN_LITERAL.is_match(value) {
        Some(InferredType::Boolean)
    } else if NUMBER_LITERAL.is_match(value) {
        Some(InferredType::Number)
    } else {
        None
    }
}
