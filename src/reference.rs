//! Variable references inside values and rule strings.
//!
//! Env values and schema rule strings may refer to other keys using one of
//! three surface syntaxes:
//!
//! - `${NAME}` - braced reference
//! - `{$NAME}` - inverted braced reference
//! - `$NAME` - bare reference
//!
//! where `NAME` matches `[A-Za-z_][A-Za-z0-9_]*`.
//!
//! A `$` directly preceded by a backslash (`\$NAME`) or by another `$`
//! (`$$NAME`) is literal text. A bare reference directly followed by `$`
//! (`$NAME$`) is not a reference either.
//!
//! # Example
//!
//! ```
//! use env_sentinel::reference::{find_references, has_reference};
//!
//! let refs = find_references("postgres://${DB_USER}@{$DB_HOST}:$DB_PORT");
//! let keys: Vec<_> = refs.iter().map(|r| r.key.as_str()).collect();
//! assert_eq!(keys, vec!["DB_USER", "DB_HOST", "DB_PORT"]);
//!
//! assert!(!has_reference(r"price is \$FIVE"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DocumentKind, Result, SentinelError};

static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$\{(?P<braced>[A-Za-z_][A-Za-z0-9_]*)\}|\{\$(?P<inverted>[A-Za-z_][A-Za-z0-9_]*)\}|\$(?P<bare>[A-Za-z_][A-Za-z0-9_]*)",
    )
    .unwrap()
});

/// Which surface syntax a reference was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSyntax {
    /// `${NAME}`
    Braced,
    /// `{$NAME}`
    Inverted,
    /// `$NAME`
    Bare,
}

/// A reference found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The referenced key.
    pub key: String,
    /// Byte offset of the first character of the reference token.
    pub start: usize,
    /// Byte offset one past the last character of the reference token.
    pub end: usize,
    /// Surface syntax of the token.
    pub syntax: ReferenceSyntax,
}

/// Find every reference in `input`, left to right.
pub fn find_references(input: &str) -> Vec<Reference> {
    let bytes = input.as_bytes();
    let mut references = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let Some(caps) = REFERENCE_REGEX.captures_at(input, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        let (syntax, key) = if let Some(m) = caps.name("braced") {
            (ReferenceSyntax::Braced, m)
        } else if let Some(m) = caps.name("inverted") {
            (ReferenceSyntax::Inverted, m)
        } else if let Some(m) = caps.name("bare") {
            (ReferenceSyntax::Bare, m)
        } else {
            break;
        };

        let start = whole.start();
        let preceding = start.checked_sub(1).map(|i| bytes[i]);
        let escaped = match syntax {
            ReferenceSyntax::Inverted => preceding == Some(b'\\'),
            _ => matches!(preceding, Some(b'\\') | Some(b'$')),
        };
        let dollar_follows =
            syntax == ReferenceSyntax::Bare && bytes.get(whole.end()) == Some(&b'$');

        if escaped || dollar_follows {
            // Retry one byte further so an inner token can still match.
            pos = start + 1;
            continue;
        }

        references.push(Reference {
            key: key.as_str().to_string(),
            start,
            end: whole.end(),
            syntax,
        });
        pos = whole.end();
    }

    references
}

/// Check if a string contains at least one reference.
pub fn has_reference(input: &str) -> bool {
    !find_references(input).is_empty()
}

/// Extract the key from a single reference token such as `${FOO}`.
///
/// Returns `None` when the token contains no reference.
pub fn referenced_key(token: &str) -> Option<String> {
    find_references(token).into_iter().next().map(|r| r.key)
}

/// Replace every reference in `input` with the value returned by `lookup`.
///
/// # Errors
///
/// Returns [`SentinelError::ReferenceNotFound`] for the first reference whose
/// key `lookup` cannot resolve; `origin` names the document searched.
pub fn resolve_references<'a, F>(input: &str, origin: DocumentKind, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut result = String::with_capacity(input.len());
    let mut last = 0;

    for reference in find_references(input) {
        let value = lookup(&reference.key).ok_or_else(|| SentinelError::ReferenceNotFound {
            key: reference.key.clone(),
            origin,
        })?;
        result.push_str(&input[last..reference.start]);
        result.push_str(value);
        last = reference.end;
    }
    result.push_str(&input[last..]);

    Ok(result)
}
