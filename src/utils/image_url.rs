//! Upstream image URL normalization.
//!
//! The content API links thumbnail variants whose file names carry a
//! `_<width>x<height>` suffix. Stripping the suffix yields the
//! full-resolution asset.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a trailing `_<width>x<height>` token directly before the file
/// extension, e.g. `_300x300.webp`.
static THUMBNAIL_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\d+x\d+(\.\w+)$").expect("Invalid regex pattern"));

/// Strips the thumbnail size suffix from an upstream image URL.
///
/// `https://cdn.example.com/photo_300x300.webp` becomes
/// `https://cdn.example.com/photo.webp`. URLs without the suffix pass
/// through unchanged, so the function is safe to apply twice.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     clean_image_url("https://cdn.example.com/a_640x360.jpg"),
///     "https://cdn.example.com/a.jpg"
/// );
/// assert_eq!(clean_image_url("https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
/// ```
pub fn clean_image_url(url: &str) -> String {
    THUMBNAIL_SUFFIX_REGEX.replace(url, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_size_suffix() {
        assert_eq!(
            clean_image_url("https://cdn.example.com/photo_300x300.webp"),
            "https://cdn.example.com/photo.webp"
        );
    }

    #[test]
    fn test_clean_strips_large_dimensions() {
        assert_eq!(
            clean_image_url("https://cdn.example.com/banner_1920x1080.jpg"),
            "https://cdn.example.com/banner.jpg"
        );
    }

    #[test]
    fn test_clean_strips_single_digit_dimensions() {
        assert_eq!(clean_image_url("pixel_1x1.png"), "pixel.png");
    }

    #[test]
    fn test_clean_without_suffix_unchanged() {
        assert_eq!(
            clean_image_url("https://cdn.example.com/photo.webp"),
            "https://cdn.example.com/photo.webp"
        );
    }

    #[test]
    fn test_clean_suffix_in_middle_unchanged() {
        assert_eq!(
            clean_image_url("https://cdn.example.com/a_300x300_cropped.webp"),
            "https://cdn.example.com/a_300x300_cropped.webp"
        );
    }

    #[test]
    fn test_clean_suffix_before_query_unchanged() {
        // Anchored at the end of the string, so query strings defeat the
        // match. Upstream never appends queries to asset links.
        assert_eq!(
            clean_image_url("https://cdn.example.com/a_300x300.webp?v=2"),
            "https://cdn.example.com/a_300x300.webp?v=2"
        );
    }

    #[test]
    fn test_clean_non_numeric_dimensions_unchanged() {
        assert_eq!(clean_image_url("photo_axb.webp"), "photo_axb.webp");
    }

    #[test]
    fn test_clean_missing_separator_unchanged() {
        assert_eq!(clean_image_url("photo300x300.webp"), "photo300x300.webp");
    }

    #[test]
    fn test_clean_empty_string() {
        assert_eq!(clean_image_url(""), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean_image_url("https://cdn.example.com/photo_640x360.jpeg");
        let twice = clean_image_url(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_preserves_path_segments() {
        assert_eq!(
            clean_image_url("https://cdn.example.com/2024/05/photo_120x90.png"),
            "https://cdn.example.com/2024/05/photo.png"
        );
    }
}
