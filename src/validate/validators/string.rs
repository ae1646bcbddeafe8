//! `string` type marker.

use super::ValidationOutcome;

/// Accepts every value; env values are strings already.
pub fn validate_string(_key: &str, _value: &str, _args: &[String]) -> ValidationOutcome {
    Ok(())
}
