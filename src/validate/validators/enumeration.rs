//! `enum` validator.

use super::ValidationOutcome;

/// Accepts values listed verbatim among the arguments.
pub fn validate_enum(key: &str, value: &str, args: &[String]) -> ValidationOutcome {
    if args.iter().any(|allowed| allowed == value) {
        Ok(())
    } else {
        Err(format!("{key} must be one of: {}", args.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["dev".into(), "prod".into(), "test".into()]
    }

    #[test]
    fn accepts_listed_value() {
        assert!(validate_enum("KEY", "prod", &allowed()).is_ok());
    }

    #[test]
    fn lists_allowed_values_on_failure() {
        assert_eq!(
            validate_enum("KEY", "staging", &allowed()),
            Err("KEY must be one of: dev, prod, test".to_string())
        );
    }

    #[test]
    fn comparison_is_exact() {
        assert!(validate_enum("KEY", "PROD", &allowed()).is_err());
        assert!(validate_enum("KEY", " prod", &allowed()).is_err());
    }
}
