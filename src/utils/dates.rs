//! Publish date formatting for templates.
//!
//! The content API emits `dateTimeStart` as a string and is not consistent
//! about the shape (RFC 3339 with offset, or a bare local timestamp).
//! Rendering keeps whatever arrives parseable readable and passes anything
//! else through untouched.

use chrono::{DateTime, NaiveDateTime};

/// Display format used on article pages and teasers.
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats an upstream publish timestamp for display.
///
/// Accepts RFC 3339 (`2024-05-01T10:30:00+07:00`) and bare timestamps with
/// either a `T` or space separator. Unparseable input is returned verbatim;
/// a bad date from upstream must not take the page down.
pub fn format_publish_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339_with_offset() {
        assert_eq!(
            format_publish_date("2024-05-01T10:30:00+07:00"),
            "01/05/2024 10:30"
        );
    }

    #[test]
    fn test_format_rfc3339_utc() {
        assert_eq!(
            format_publish_date("2024-12-31T23:59:59Z"),
            "31/12/2024 23:59"
        );
    }

    #[test]
    fn test_format_naive_t_separator() {
        assert_eq!(
            format_publish_date("2024-05-01T10:30:00"),
            "01/05/2024 10:30"
        );
    }

    #[test]
    fn test_format_naive_space_separator() {
        assert_eq!(
            format_publish_date("2024-05-01 10:30:00"),
            "01/05/2024 10:30"
        );
    }

    #[test]
    fn test_format_unparseable_passthrough() {
        assert_eq!(format_publish_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_empty_passthrough() {
        assert_eq!(format_publish_date(""), "");
    }

    #[test]
    fn test_format_date_only_passthrough() {
        // Date-only strings are rare enough upstream that no pattern is
        // registered for them.
        assert_eq!(format_publish_date("2024-05-01"), "2024-05-01");
    }
}
