//! `number` validator.

use super::ValidationOutcome;

/// Accepts values whose trimmed form parses as a finite number.
pub fn validate_number(key: &str, value: &str, _args: &[String]) -> ValidationOutcome {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if !trimmed.is_empty() && n.is_finite() => Ok(()),
        _ => Err(format!("Invalid number for {key}")),
    }
}
