//! `min` validator.
//!
//! Numeric values are compared as numbers; anything else is compared by its
//! character count.

use super::{canonical_number, parse_bound, ValidationOutcome};

/// Lower bound on a number or on a value's length.
pub fn validate_min(key: &str, value: &str, args: &[String]) -> ValidationOutcome {
    let Some(min) = parse_bound(args) else {
        return Err(format!("Invalid min argument for {key}"));
    };

    match canonical_number(value) {
        Some(n) if n < min => Err(format!("{key} must be >= {min}")),
        Some(_) => Ok(()),
        None if (value.chars().count() as f64) < min => {
            Err(format!("{key} must be at least {min} characters long"))
        }
        None => Ok(()),
    }
}
