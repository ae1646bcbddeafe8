//! `secure` validator.
//!
//! Conditions are checked in a fixed order and the first failure is
//! reported: length, lowercase, uppercase, digit, symbol, whitespace.

use super::ValidationOutcome;

const MIN_LENGTH: usize = 8;
const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Password-strength check.
pub fn validate_secure(key: &str, value: &str, _args: &[String]) -> ValidationOutcome {
    if value.chars().count() < MIN_LENGTH {
        return Err(format!("{key} must be at least {MIN_LENGTH} characters long"));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(format!("{key} must contain at least one lowercase letter"));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(format!("{key} must contain at least one uppercase letter"));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(format!("{key} must contain at least one number"));
    }
    if !value.chars().any(|c| SYMBOLS.contains(c)) {
        return Err(format!("{key} must contain at least one special character"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(format!("{key} must not contain spaces"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str) -> ValidationOutcome {
        validate_secure("SECRET", value, &[])
    }

    #[test]
    fn accepts_strong_value() {
        assert!(check("Str0ng!Pass").is_ok());
    }

    #[test]
    fn length_is_checked_first() {
        assert_eq!(
            check("short1!"),
            Err("SECRET must be at least 8 characters long".to_string())
        );
    }

    #[test]
    fn reports_first_failing_condition() {
        assert_eq!(
            check("ALLUPPER1!"),
            Err("SECRET must contain at least one lowercase letter".to_string())
        );
        assert_eq!(
            check("alllower1!"),
            Err("SECRET must contain at least one uppercase letter".to_string())
        );
        assert_eq!(
            check("NoDigits!!"),
            Err("SECRET must contain at least one number".to_string())
        );
        assert_eq!(
            check("NoSymbol123"),
            Err("SECRET must contain at least one special character".to_string())
        );
        assert_eq!(
            check("Has Space1!"),
            Err("SECRET must not contain spaces".to_string())
        );
    }
}
