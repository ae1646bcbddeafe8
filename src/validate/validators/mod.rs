//! Built-in value validators.
//!
//! A validator receives the key, its value and the rule arguments and
//! returns `Ok(())` or the message to report. Any
//! `Fn(&str, &str, &[String]) -> ValidationOutcome` closure is a validator.

pub mod boolean;
pub mod enumeration;
pub mod max;
pub mod min;
pub mod number;
pub mod secure;
pub mod string;

use std::sync::Arc;

pub use boolean::validate_boolean;
pub use enumeration::validate_enum;
pub use max::validate_max;
pub use min::validate_min;
pub use number::validate_number;
pub use secure::validate_secure;
pub use string::validate_string;

/// Outcome of a single validator: the failure message on error.
pub type ValidationOutcome = std::result::Result<(), String>;

/// A value-level validator.
pub trait ValueValidator: Send + Sync {
    /// Check `value` of `key` against the rule's `args`.
    fn validate(&self, key: &str, value: &str, args: &[String]) -> ValidationOutcome;
}

impl<F> ValueValidator for F
where
    F: Fn(&str, &str, &[String]) -> ValidationOutcome + Send + Sync,
{
    fn validate(&self, key: &str, value: &str, args: &[String]) -> ValidationOutcome {
        self(key, value, args)
    }
}

/// Every built-in validator with its rule name, in registration order.
pub fn builtin_validators() -> Vec<(String, Arc<dyn ValueValidator>)> {
    vec![
        entry("number", validate_number),
        entry("min", validate_min),
        entry("max", validate_max),
        entry("boolean", validate_boolean),
        entry("secure", validate_secure),
        entry("enum", validate_enum),
        entry("string", validate_string),
    ]
}

fn entry(
    name: &str,
    validator: impl ValueValidator + 'static,
) -> (String, Arc<dyn ValueValidator>) {
    (name.to_string(), Arc::new(validator))
}

/// Bound used by `min` and `max`, parsed from the first argument.
pub(crate) fn parse_bound(args: &[String]) -> Option<f64> {
    args.first()
        .and_then(|arg| arg.trim().parse::<f64>().ok())
        .filter(|bound| bound.is_finite())
}

/// The value as a number, when it is written exactly the way the number
/// prints. `"42"` and `"-1.5"` qualify; `"042"`, `"1e3"` and `" 7"` are
/// compared by length instead.
pub(crate) fn canonical_number(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && n.to_string() == value)
}
