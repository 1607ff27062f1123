//! YouTube video ID extraction (`youtu.be/ID`, `watch?v=ID`, `embed/ID`).

use url::Url;

/// Returns the YouTube video ID carried by `url`, if any.
///
/// Short links take the whole path after the leading `/`. Full-site links
/// (including the no-cookie domain) prefer a non-empty `v` query parameter
/// and otherwise look for the segment after `embed`.
pub fn extract_youtube_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    if host.contains("youtu.be") {
        let id = url.path().strip_prefix('/').unwrap_or(url.path());
        return non_empty(id);
    }

    if host.contains("youtube.com") || host.contains("youtube-nocookie.com") {
        let from_query = url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .and_then(|(_, value)| non_empty(&value));
        if from_query.is_some() {
            return from_query;
        }

        let segments: Vec<&str> = url.path().split('/').collect();
        let idx = segments.iter().position(|s| *s == "embed")?;
        return segments.get(idx + 1).and_then(|s| non_empty(s));
    }

    None
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
