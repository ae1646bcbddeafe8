//! `max` validator.
//!
//! Mirror image of `min`: numbers compare numerically, everything else by
//! character count.

use super::{canonical_number, parse_bound, ValidationOutcome};

/// Upper bound on a number or on a value's length.
pub fn validate_max(key: &str, value: &str, args: &[String]) -> ValidationOutcome {
    let Some(max) = parse_bound(args) else {
        return Err(format!("Invalid max argument for {key}"));
    };

    match canonical_number(value) {
        Some(n) if n > max => Err(format!("{key} must be <= {max}")),
        Some(_) => Ok(()),
        None if (value.chars().count() as f64) > max => {
            Err(format!("{key} must be at most {max} characters long"))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(bound: &str) -> Vec<String> {
        vec![bound.to_string()]
    }

    #[test]
    fn compares_numbers_numerically() {
        assert!(validate_max("PORT", "65535", &args("65535")).is_ok());
        assert_eq!(
            validate_max("PORT", "70000", &args("65535")),
            Err("PORT must be <= 65535".to_string())
        );
    }

    #[test]
    fn compares_text_by_length() {
        assert!(validate_max("CODE", "abcd", &args("4")).is_ok());
        assert_eq!(
            validate_max("CODE", "abcde", &args("4")),
            Err("CODE must be at most 4 characters long".to_string())
        );
    }

    #[test]
    fn non_canonical_numerals_use_length() {
        // "0005" has four characters
        assert!(validate_max("CODE", "0005", &args("4")).is_ok());
    }

    #[test]
    fn invalid_argument() {
        assert_eq!(
            validate_max("PORT", "5", &args("")),
            Err("Invalid max argument for PORT".to_string())
        );
    }
}
