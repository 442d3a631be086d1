//! Article teaser URL slugs.
//!
//! Teaser links embed a human-readable slug derived from the headline,
//! followed by the article identifier: `/breaking-headline-ab124bdc1534`.
//! Only the trailing identifier is meaningful when the link is resolved;
//! the slug exists for readers and crawlers.

/// Builds a URL-safe slug from an article headline.
///
/// Lowercases the input, replaces every non-alphanumeric ASCII run with a
/// single hyphen, and trims leading/trailing hyphens. Non-ASCII characters
/// collapse into the separating hyphens, which keeps the path ASCII-clean
/// for CDN cache keys.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Breaking: Big Match Tonight!"), "breaking-big-match-tonight");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Builds the site-relative path for an article page.
///
/// The identifier always terminates the path so the route handler can
/// recover it from the final 12 characters. Headlines that slugify to
/// nothing produce a bare identifier path.
pub fn article_path(title: &str, id: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("/{id}")
    } else {
        format!("/{slug}-{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple_title() {
        assert_eq!(slugify("Breaking News Today"), "breaking-news-today");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(
            slugify("Breaking: Big Match Tonight!"),
            "breaking-big-match-tonight"
        );
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("one -- two   three"), "one-two-three");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_non_ascii() {
        assert_eq!(slugify("Tin tức nóng"), "tin-t-c-n-ng");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_only_punctuation() {
        assert_eq!(slugify("!?!"), "");
    }

    #[test]
    fn test_slugify_preserves_digits() {
        assert_eq!(slugify("Top 10 Goals of 2024"), "top-10-goals-of-2024");
    }

    #[test]
    fn test_article_path_joins_slug_and_id() {
        assert_eq!(
            article_path("Breaking News", "ab124bdc1534"),
            "/breaking-news-ab124bdc1534"
        );
    }

    #[test]
    fn test_article_path_empty_title() {
        assert_eq!(article_path("", "ab124bdc1534"), "/ab124bdc1534");
    }

    #[test]
    fn test_article_path_id_recoverable() {
        let path = article_path("Some Headline Here", "ab124bdc1534");
        assert!(path.ends_with("ab124bdc1534"));
        assert_eq!(
            crate::utils::article_id::article_id_from_slug(&path[1..]),
            Some("ab124bdc1534")
        );
    }
}
