//! `boolean` validator.

use super::ValidationOutcome;

/// Accepts `true` or `false` in any letter case.
pub fn validate_boolean(key: &str, value: &str, _args: &[String]) -> ValidationOutcome {
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        Ok(())
    } else {
        Err(format!("Invalid boolean for {key}, must be 'true' or 'false'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_case() {
        for value in ["true", "false", "TRUE", "False"] {
            assert!(validate_boolean("DEBUG", value, &[]).is_ok());
        }
    }

    #[test]
    fn rejects_other_literals() {
        for value in ["yes", "1", "", " true"] {
            assert_eq!(
                validate_boolean("DEBUG", value, &[]),
                Err("Invalid boolean for DEBUG, must be 'true' or 'false'".to_string())
            );
        }
    }
}
