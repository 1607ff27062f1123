//! Direct media file detection by path extension.

use url::Url;

/// Extensions recognized as natively playable when no config overrides them.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

/// True if the URL path (query and fragment excluded) ends with `.<ext>` for
/// one of `extensions`, compared ASCII case-insensitively.
///
/// `extensions` are expected lowercase and without a leading dot; see
/// [`normalize_extension`].
pub fn is_direct_video_file<S: AsRef<str>>(url: &Url, extensions: &[S]) -> bool {
    let path = url.path().to_ascii_lowercase();
    extensions.iter().any(|ext| {
        path.strip_suffix(ext.as_ref())
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

/// Lowercases an extension and strips any leading dots (`".MP4"` -> `"mp4"`).
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct(raw: &str) -> bool {
        is_direct_video_file(&Url::parse(raw).unwrap(), DEFAULT_VIDEO_EXTENSIONS)
    }

    #[test]
    fn default_extensions() {
        assert!(direct("https://example.com/movie.mp4"));
        assert!(direct("https://example.com/a/b/clip.webm"));
        assert!(direct("https://example.com/sound.ogg"));
    }

    #[test]
    fn case_insensitive() {
        assert!(direct("https://example.com/MOVIE.MP4"));
        assert!(direct("https://example.com/clip.WebM"));
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert!(direct("https://example.com/movie.mp4?token=x"));
        assert!(direct("https://example.com/movie.mp4#t=10"));
    }

    #[test]
    fn non_video_paths() {
        assert!(!direct("https://example.com/movie.mkv"));
        assert!(!direct("https://example.com/page?file=movie.mp4"));
        assert!(!direct("https://example.com/mp4"));
        assert!(!direct("https://example.com/movie.mp4/"));
    }

    #[test]
    fn custom_extensions() {
        let url = Url::parse("https://example.com/stream.M3U8").unwrap();
        assert!(is_direct_video_file(&url, &["m3u8".to_string()]));
        assert!(!is_direct_video_file(&url, DEFAULT_VIDEO_EXTENSIONS));
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_extension(".MP4"), "mp4");
        assert_eq!(normalize_extension(" webm "), "webm");
    }
}
