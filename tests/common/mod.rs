#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use newsedge::application::services::{ContentService, TenantService};
use newsedge::domain::entities::{Article, NewsGroup, TenantRegistry};
use newsedge::domain::sources::{ContentSource, SourceError, SourceResult};
use newsedge::infrastructure::cache::TtlCache;
use newsedge::routes::router;
use newsedge::state::AppState;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Canned upstream for handler tests.
///
/// Missing ids answer the way the real tiers do: the primary returns an
/// empty list, the backup a 404 status.
#[derive(Default)]
pub struct StubSource {
    pub listing: Vec<NewsGroup>,
    pub listing_fails: bool,
    pub articles: HashMap<String, Vec<Article>>,
    pub primary_fails: bool,
    pub backup_articles: HashMap<String, Article>,
}

#[async_trait]
impl ContentSource for StubSource {
    async fn fetch_listing(&self) -> SourceResult<Vec<NewsGroup>> {
        if self.listing_fails {
            return Err(SourceError::Network("stub listing failure".to_string()));
        }
        Ok(self.listing.clone())
    }

    async fn fetch_article(&self, id: &str) -> SourceResult<Vec<Article>> {
        if self.primary_fails {
            return Err(SourceError::Network("stub primary failure".to_string()));
        }
        Ok(self.articles.get(id).cloned().unwrap_or_default())
    }

    async fn fetch_backup_article(&self, id: &str) -> SourceResult<Article> {
        self.backup_articles
            .get(id)
            .cloned()
            .ok_or(SourceError::Status(404))
    }
}

pub fn sample_article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        summary: format!("Summary of {title}"),
        html_content: "<p>One.</p><p>Two.</p><p>Three.</p><p>Four.</p><p>Five.</p>".to_string(),
        avatar_image_url: "https://cdn.example.com/thumb_300x300.webp".to_string(),
        root_image_url: "https://cdn.example.com/hero_640x360.webp".to_string(),
        published_at: "2024-05-01T10:30:00".to_string(),
    }
}

pub fn sample_listing() -> Vec<NewsGroup> {
    vec![
        NewsGroup {
            name: "NFL".to_string(),
            articles: vec![
                sample_article("ab124bdc1534", "Big Match Tonight"),
                sample_article("cd9876543210", "Injury Report Update"),
            ],
        },
        NewsGroup {
            name: "Entertainment".to_string(),
            articles: vec![sample_article("ef0123456789", "Festival Season Opens")],
        },
    ]
}

pub fn create_test_state(source: StubSource) -> AppState {
    create_test_state_with_ads_dir(source, PathBuf::from("no-such-ads-dir"))
}

pub fn create_test_state_with_ads_dir(source: StubSource, ads_dir: PathBuf) -> AppState {
    let listing_cache = Arc::new(TtlCache::new("news_list", Duration::from_secs(300)));
    let article_cache = Arc::new(TtlCache::new("articles", Duration::from_secs(600)));

    let content = Arc::new(ContentService::new(
        Arc::new(source),
        listing_cache,
        article_cache,
    ));
    let tenants = Arc::new(TenantService::new(TenantRegistry::builtin()));

    AppState::new(tenants, content, ads_dir)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}
