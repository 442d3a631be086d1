//! Article entities resolved from the upstream content API.

use serde::{Deserialize, Serialize};

use crate::utils::article_id::is_valid_article_id;
use crate::utils::image_url::clean_image_url;
use crate::utils::slug::article_path;

/// A single news article as the content API delivers it.
///
/// Serde attributes map the upstream wire names (`name` for the headline,
/// `content` for the body HTML, camelCase for the rest). Every field
/// defaults so a sparse upstream object still deserializes; the resolution
/// service normalizes image URLs before an article leaves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "name", default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(rename = "content", default)]
    pub html_content: String,
    #[serde(rename = "avatarLink", default)]
    pub avatar_image_url: String,
    #[serde(rename = "urlRootLink", default)]
    pub root_image_url: String,
    #[serde(rename = "dateTimeStart", default)]
    pub published_at: String,
}

impl Article {
    /// Rewrites both image URLs to their full-resolution form.
    pub fn normalize_images(&mut self) {
        self.avatar_image_url = clean_image_url(&self.avatar_image_url);
        self.root_image_url = clean_image_url(&self.root_image_url);
    }

    /// Returns true when the article carries a well-formed identifier.
    ///
    /// Upstream occasionally omits `id`; such articles render but cannot be
    /// linked to.
    pub fn has_id(&self) -> bool {
        is_valid_article_id(&self.id)
    }

    /// Site-relative URL of this article's page.
    pub fn path(&self) -> String {
        article_path(&self.title, &self.id)
    }
}

/// A named listing category and its articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsGroup {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "detail", default)]
    pub articles: Vec<Article>,
}

/// The grouped home-page feed.
///
/// A failed listing fetch produces the degraded shape: no groups plus an
/// error message for the empty-state template. Callers never see an error
/// value.
#[derive(Debug, Clone)]
pub struct Listing {
    pub groups: Vec<NewsGroup>,
    pub error: Option<String>,
}

impl Listing {
    /// Creates a healthy listing from upstream groups.
    pub fn new(groups: Vec<NewsGroup>) -> Self {
        Self {
            groups,
            error: None,
        }
    }

    /// Creates the degraded listing shape carrying a failure message.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            groups: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Returns true when this listing is the degraded failure shape.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// Total article count across all groups.
    pub fn article_count(&self) -> usize {
        self.groups.iter().map(|g| g.articles.len()).sum()
    }
}

/// Resolution result for one article id.
///
/// The primary article comes first; `has_second_article` marks whether a
/// follow-up article is available for the continue-reading section. Backup
/// resolutions always carry exactly one article.
#[derive(Debug, Clone)]
pub struct ArticleBundle {
    pub articles: Vec<Article>,
    pub has_second_article: bool,
}

impl ArticleBundle {
    /// Builds a bundle from upstream articles, primary first.
    pub fn new(articles: Vec<Article>) -> Self {
        let has_second_article = articles.len() > 1;
        Self {
            articles,
            has_second_article,
        }
    }

    /// The article the page is about.
    pub fn primary(&self) -> Option<&Article> {
        self.articles.first()
    }

    /// The follow-up article, when the upstream returned one.
    pub fn second(&self) -> Option<&Article> {
        if self.has_second_article {
            self.articles.get(1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: "ab124bdc1534".to_string(),
            title: "Big Match Tonight".to_string(),
            summary: "A short summary".to_string(),
            html_content: "<p>Body</p>".to_string(),
            avatar_image_url: "https://cdn.example.com/a_300x300.webp".to_string(),
            root_image_url: "https://cdn.example.com/b_640x360.jpg".to_string(),
            published_at: "2024-05-01T10:30:00".to_string(),
        }
    }

    #[test]
    fn test_article_deserializes_wire_names() {
        let json = serde_json::json!({
            "id": "ab124bdc1534",
            "name": "Big Match Tonight",
            "summary": "A short summary",
            "content": "<p>Body</p>",
            "avatarLink": "https://cdn.example.com/a_300x300.webp",
            "urlRootLink": "https://cdn.example.com/b.jpg",
            "dateTimeStart": "2024-05-01T10:30:00"
        });

        let article: Article = serde_json::from_value(json).unwrap();
        assert_eq!(article.id, "ab124bdc1534");
        assert_eq!(article.title, "Big Match Tonight");
        assert_eq!(article.html_content, "<p>Body</p>");
        assert_eq!(article.avatar_image_url, "https://cdn.example.com/a_300x300.webp");
    }

    #[test]
    fn test_article_deserializes_sparse_object() {
        let article: Article = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(article.id, "");
        assert_eq!(article.title, "");
        assert!(!article.has_id());
    }

    #[test]
    fn test_article_ignores_unknown_wire_fields() {
        let json = serde_json::json!({
            "id": "ab124bdc1534",
            "name": "Title",
            "category": 7,
            "viewCount": 123
        });

        let article: Article = serde_json::from_value(json).unwrap();
        assert_eq!(article.id, "ab124bdc1534");
    }

    #[test]
    fn test_normalize_images_strips_suffixes() {
        let mut article = sample_article();
        article.normalize_images();

        assert_eq!(article.avatar_image_url, "https://cdn.example.com/a.webp");
        assert_eq!(article.root_image_url, "https://cdn.example.com/b.jpg");
    }

    #[test]
    fn test_article_path_embeds_id() {
        let article = sample_article();
        assert_eq!(article.path(), "/big-match-tonight-ab124bdc1534");
    }

    #[test]
    fn test_listing_healthy() {
        let listing = Listing::new(vec![NewsGroup {
            name: "Football".to_string(),
            articles: vec![sample_article()],
        }]);

        assert!(!listing.is_degraded());
        assert_eq!(listing.article_count(), 1);
    }

    #[test]
    fn test_listing_degraded() {
        let listing = Listing::degraded("upstream unavailable");

        assert!(listing.is_degraded());
        assert!(listing.groups.is_empty());
        assert_eq!(listing.article_count(), 0);
    }

    #[test]
    fn test_bundle_with_two_articles() {
        let bundle = ArticleBundle::new(vec![sample_article(), sample_article()]);

        assert!(bundle.has_second_article);
        assert!(bundle.primary().is_some());
        assert!(bundle.second().is_some());
    }

    #[test]
    fn test_bundle_with_single_article() {
        let bundle = ArticleBundle::new(vec![sample_article()]);

        assert!(!bundle.has_second_article);
        assert!(bundle.primary().is_some());
        assert!(bundle.second().is_none());
    }

    #[test]
    fn test_bundle_empty() {
        let bundle = ArticleBundle::new(Vec::new());

        assert!(!bundle.has_second_article);
        assert!(bundle.primary().is_none());
    }
}
