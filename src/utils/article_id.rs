//! Article identifier extraction and validation.
//!
//! Article URLs embed the upstream identifier as the last segment of the
//! slug (`/some-headline-ab124bdc1534`). The identifier is always 12
//! lowercase hexadecimal characters.

/// Length of an upstream article identifier.
pub const ARTICLE_ID_LENGTH: usize = 12;

/// Checks whether `id` is a well-formed article identifier.
///
/// Valid identifiers are exactly 12 characters of lowercase hex
/// (`[a-f0-9]`). Uppercase input is rejected; upstream ids are emitted
/// lowercase and links are generated lowercase.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_article_id("ab124bdc1534"));
/// assert!(!is_valid_article_id("AB124BDC1534"));
/// assert!(!is_valid_article_id("ab124"));
/// ```
pub fn is_valid_article_id(id: &str) -> bool {
    id.len() == ARTICLE_ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Extracts the article identifier from a URL slug.
///
/// Takes the trailing [`ARTICLE_ID_LENGTH`] bytes of the slug and validates
/// them. Returns `None` when the slug is too short, the tail is not a
/// character boundary, or the tail fails validation.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     article_id_from_slug("breaking-news-headline-ab124bdc1534"),
///     Some("ab124bdc1534")
/// );
/// assert_eq!(article_id_from_slug("about-us"), None);
/// ```
pub fn article_id_from_slug(slug: &str) -> Option<&str> {
    let start = slug.len().checked_sub(ARTICLE_ID_LENGTH)?;
    if !slug.is_char_boundary(start) {
        return None;
    }

    let tail = &slug[start..];
    is_valid_article_id(tail).then_some(tail)
}
