//! The http(s)-only gate every input passes through before classification.

use crate::error::ResolveError;
use url::Url;

/// An absolute URL whose scheme is `http` or `https`.
///
/// The only way to obtain one is [`validate`], so holding a `ValidatedUrl`
/// means no script-invoking or otherwise unexpected scheme can reach a
/// rendering path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Canonical serialization produced by the parser.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Parses `raw` as an absolute URL and accepts it only for `http`/`https`.
///
/// Leading/trailing whitespace is stripped by the parser. Schemes are
/// lowercased during parsing, so `HTTPS://` passes while `javascript:http://x`
/// does not.
pub fn validate(raw: &str) -> Result<ValidatedUrl, ResolveError> {
    let url = Url::parse(raw).map_err(ResolveError::Unparseable)?;
    match url.scheme() {
        "http" | "https" => Ok(ValidatedUrl(url)),
        scheme => Err(ResolveError::DisallowedScheme {
            scheme: scheme.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate("http://example.com").is_ok());
        assert!(validate("https://example.com/a?b=c").is_ok());
    }

    #[test]
    fn uppercase_scheme_is_normalized() {
        let v = validate("HTTPS://Example.COM/Path").unwrap();
        assert_eq!(v.as_str(), "https://example.com/Path");
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let v = validate("  https://example.com/x  ").unwrap();
        assert_eq!(v.as_str(), "https://example.com/x");
    }

    #[test]
    fn rejects_empty_and_relative() {
        assert!(matches!(validate(""), Err(ResolveError::Unparseable(_))));
        assert!(matches!(validate("   "), Err(ResolveError::Unparseable(_))));
        assert!(matches!(
            validate("example.com/video"),
            Err(ResolveError::Unparseable(_))
        ));
    }

    #[test]
    fn rejects_other_schemes() {
        for raw in [
            "javascript:alert(1)",
            "javascript:http://evil",
            "ftp://example.com/a.mp4",
            "data:text/html,<b>x</b>",
            "file:///etc/passwd",
        ] {
            match validate(raw) {
                Err(ResolveError::DisallowedScheme { .. }) => {}
                other => panic!("{raw} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn canonicalizes_host_and_path() {
        let v = validate("https://EXAMPLE.com").unwrap();
        assert_eq!(v.as_str(), "https://example.com/");
    }
}
