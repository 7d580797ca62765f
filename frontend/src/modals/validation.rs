use url::Url;

pub const VIDEO_EXTENSIONS: [&str; 6] = [".mp4", ".webm", ".ogg", ".mov", ".avi", ".mkv"];

pub const MISSING_SCHEME: &str =
    "URL must start with http:// or https:// (e.g., https://example.com/video.mp4)";
pub const UNPARSEABLE: &str = "Please enter a valid URL (e.g., https://example.com/video.mp4)";
pub const NOT_A_VIDEO: &str = "Please enter a URL to a video file (MP4, WebM, OGG, MOV, AVI, MKV)";
pub const INVALID_ON_SUBMIT: &str = "Please enter a valid video URL";

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Parseable and mentions a known video extension anywhere, case-insensitive.
pub fn is_valid_video_url(url: &str) -> bool {
    if !is_valid_url(url) {
        return false;
    }
    let lower = url.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}

/// Message shown under the URL field while typing; `None` when there is nothing to say.
pub fn url_feedback(url: &str) -> Option<&'static str> {
    if url.trim().is_empty() {
        None
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        Some(MISSING_SCHEME)
    } else if !is_valid_url(url) {
        Some(UNPARSEABLE)
    } else if !is_valid_video_url(url) {
        Some(NOT_A_VIDEO)
    } else {
        None
    }
}

/// Last check before a create request goes out.
pub fn submit_error(url: &str) -> Option<&'static str> {
    (!url.trim().is_empty() && !is_valid_video_url(url)).then_some(INVALID_ON_SUBMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_message() {
        assert_eq!(url_feedback(""), None);
        assert_eq!(url_feedback("   "), None);
    }

    #[test]
    fn scheme_is_checked_first() {
        assert_eq!(url_feedback("example.com/video.mp4"), Some(MISSING_SCHEME));
        assert_eq!(url_feedback("ftp://example.com/video.mp4"), Some(MISSING_SCHEME));
    }

    #[test]
    fn unparseable_urls_are_reported() {
        assert_eq!(url_feedback("http://"), Some(UNPARSEABLE));
        assert_eq!(url_feedback("https://exa mple.com/a.mp4"), Some(UNPARSEABLE));
    }

    #[test]
    fn non_video_urls_are_reported() {
        assert_eq!(url_feedback("https://example.com/page.html"), Some(NOT_A_VIDEO));
    }

    #[test]
    fn video_extension_matches_anywhere_and_ignores_case() {
        assert_eq!(url_feedback("https://example.com/clip.MP4"), None);
        assert_eq!(url_feedback("https://cdn.example.com/v.webm?token=1"), None);
        assert!(is_valid_video_url("https://example.com/movies.mkv/stream"));
    }

    #[test]
    fn submit_only_blocks_non_empty_invalid_urls() {
        assert_eq!(submit_error(""), None);
        assert_eq!(submit_error("https://example.com/video.mp4"), None);
        assert_eq!(submit_error("https://example.com/"), Some(INVALID_ON_SUBMIT));
        assert_eq!(submit_error("not a url.mp4"), Some(INVALID_ON_SUBMIT));
    }
}
