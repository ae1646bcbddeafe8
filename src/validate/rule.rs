//! Rule-string parsing.
//!
//! A rule-string is a pipe-separated list of rules, each with optional
//! comma-separated arguments after the first colon:
//!
//! ```text
//! required|min:3|enum:dev,prod
//! ```

/// One rule from a rule-string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedRule {
    /// Create a rule with arguments.
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Parse a rule-string into its rules, in order.
///
/// Tokens are trimmed and empty tokens dropped. Arguments are kept verbatim,
/// so `"enum:a, b"` yields the arguments `["a", " b"]`.
///
/// # Example
///
/// ```
/// use env_sentinel::validate::parse_rule_string;
///
/// let rules = parse_rule_string("required|min:3|enum:dev,prod");
/// assert_eq!(rules[0].name, "required");
/// assert!(rules[0].args.is_empty());
/// assert_eq!(rules[2].args, vec!["dev", "prod"]);
/// ```
pub fn parse_rule_string(rule: &str) -> Vec<ParsedRule> {
    rule.split('|')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once(':') {
            Some((name, rest)) => {
                ParsedRule::new(name, rest.split(',').map(str::to_string).collect())
            }
            None => ParsedRule::new(token, Vec::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rule: &str) -> Vec<String> {
        parse_rule_string(rule).into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn splits_on_pipes_in_order() {
        assert_eq!(names("required|number|secure"), ["required", "number", "secure"]);
    }

    #[test]
    fn drops_empty_tokens_and_trims() {
        assert_eq!(names(" required || number |"), ["required", "number"]);
        assert!(parse_rule_string("").is_empty());
        assert!(parse_rule_string(" | ").is_empty());
    }

    #[test]
    fn splits_arguments_on_commas() {
        let rules = parse_rule_string("enum:dev,prod,test");
        assert_eq!(rules[0], ParsedRule::new("enum", vec!["dev".into(), "prod".into(), "test".into()]));
    }

    #[test]
    fn only_first_colon_separates_name() {
        let rules = parse_rule_string("enum:a:b,c");
        assert_eq!(rules[0].name, "enum");
        assert_eq!(rules[0].args, vec!["a:b", "c"]);
    }

    #[test]
    fn trailing_colon_yields_one_empty_argument() {
        let rules = parse_rule_string("min:");
        assert_eq!(rules[0].args, vec![""]);
    }

    #[test]
    fn rule_without_colon_has_no_arguments() {
        let rules = parse_rule_string("required");
        assert!(rules[0].args.is_empty());
    }
}
