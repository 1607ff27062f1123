//! Rejection of untrusted input at the validation boundary.

use thiserror::Error;

/// Message shown to the user for any rejected input.
pub const REJECTION_REASON: &str = "not a safe http(s) URL";

/// Why an input was rejected. Both variants surface the same user-facing
/// reason; the payload is kept for logs and `source()` chains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Input is not a well-formed absolute URL.
    #[error("{}", REJECTION_REASON)]
    Unparseable(#[source] url::ParseError),
    /// Input parsed, but its scheme is neither `http` nor `https`.
    #[error("{}", REJECTION_REASON)]
    DisallowedScheme { scheme: String },
}

impl ResolveError {
    /// The user-facing reason string.
    pub fn reason(&self) -> &'static str {
        REJECTION_REASON
    }

    /// Short diagnostic for logs (not meant for end users).
    pub fn detail(&self) -> String {
        match self {
            ResolveError::Unparseable(e) => format!("parse error: {e}"),
            ResolveError::DisallowedScheme { scheme } => format!("scheme `{scheme}` not allowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn both_variants_share_reason() {
        let a = ResolveError::Unparseable(url::ParseError::RelativeUrlWithoutBase);
        let b = ResolveError::DisallowedScheme {
            scheme: "javascript".into(),
        };
        assert_eq!(a.to_string(), REJECTION_REASON);
        assert_eq!(b.to_string(), REJECTION_REASON);
        assert_eq!(a.reason(), b.reason());
    }

    #[test]
    fn parse_error_is_source() {
        let e = ResolveError::Unparseable(url::ParseError::EmptyHost);
        assert!(e.source().is_some());
        assert!(e.detail().starts_with("parse error"));
    }

    #[test]
    fn scheme_detail_names_scheme() {
        let e = ResolveError::DisallowedScheme { scheme: "ftp".into() };
        assert_eq!(e.detail(), "scheme `ftp` not allowed");
    }
}
