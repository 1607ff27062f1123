//! Vimeo video ID extraction.

use url::Url;

/// Returns the last non-empty path segment of any `vimeo.com` URL.
///
/// Deliberately loose: `/123`, `/video/123` and `/channels/x/123` all yield
/// `123`, and a non-numeric final segment is accepted as-is.
pub fn extract_vimeo_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if !host.contains("vimeo.com") {
        return None;
    }
    url.path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> Option<String> {
        extract_vimeo_id(&Url::parse(raw).unwrap())
    }

    #[test]
    fn plain_id() {
        assert_eq!(id("https://vimeo.com/76979871").as_deref(), Some("76979871"));
    }

    #[test]
    fn nested_paths_take_last_segment() {
        assert_eq!(
            id("https://player.vimeo.com/video/76979871").as_deref(),
            Some("76979871")
        );
        assert_eq!(
            id("https://vimeo.com/channels/staffpicks/123456/").as_deref(),
            Some("123456")
        );
    }

    #[test]
    fn root_has_no_id() {
        assert_eq!(id("https://vimeo.com/"), None);
        assert_eq!(id("https://vimeo.com"), None);
    }

    #[test]
    fn other_hosts() {
        assert_eq!(id("https://example.com/76979871"), None);
    }
}
