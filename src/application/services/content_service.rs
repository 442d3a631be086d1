//! Content resolution service with caching and tiered fallback.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::entities::{Article, ArticleBundle, Listing, NewsGroup};
use crate::domain::sources::ContentSource;
use crate::infrastructure::cache::TtlCache;

/// Cache key for the single home-page listing entry.
const LISTING_CACHE_KEY: &str = "news_list";

/// Steps of one article resolution.
///
/// Each request walks cache, primary tier, then backup tier in order and
/// stops at the first answer. The walk is explicit so every transition has
/// exactly one place to log and one place to cache.
enum Resolution {
    CacheCheck,
    PrimaryFetch,
    BackupFetch,
    Resolved(ArticleBundle),
    Failed,
}

/// Resolves listings and articles through the cache and upstream tiers.
///
/// Successful resolutions are cached with the configured TTLs. Failures and
/// known-absent articles are never cached, so the next request probes the
/// upstream again. A degraded listing is an answer, not an error; callers
/// always get a renderable value.
pub struct ContentService {
    source: Arc<dyn ContentSource>,
    listing_cache: Arc<TtlCache<Listing>>,
    article_cache: Arc<TtlCache<ArticleBundle>>,
}

impl ContentService {
    /// Creates a content service over a source and its two caches.
    pub fn new(
        source: Arc<dyn ContentSource>,
        listing_cache: Arc<TtlCache<Listing>>,
        article_cache: Arc<TtlCache<ArticleBundle>>,
    ) -> Self {
        Self {
            source,
            listing_cache,
            article_cache,
        }
    }

    /// Resolves the grouped home-page listing.
    ///
    /// Cache first, then the primary API. A fetch failure yields the
    /// degraded listing shape, which is returned but never cached.
    pub async fn listing(&self) -> Listing {
        if let Some(listing) = self.listing_cache.get(LISTING_CACHE_KEY) {
            return listing;
        }

        match self.source.fetch_listing().await {
            Ok(groups) => {
                let listing = Listing::new(normalize_groups(groups));
                self.listing_cache
                    .insert(LISTING_CACHE_KEY, listing.clone(), None);
                listing
            }
            Err(e) => {
                warn!("Listing fetch failed: {e}");
                Listing::degraded("News is temporarily unavailable. Please try again shortly.")
            }
        }
    }

    /// Resolves one article id to a bundle, or `None` when every tier
    /// comes up empty.
    ///
    /// The primary tier may return a follow-up article alongside the
    /// requested one; the backup tier always yields a single article. An
    /// empty primary answer is treated the same as a primary failure:
    /// continue to the backup.
    pub async fn article(&self, id: &str) -> Option<ArticleBundle> {
        let cache_key = article_cache_key(id);
        let mut step = Resolution::CacheCheck;

        loop {
            step = match step {
                Resolution::CacheCheck => match self.article_cache.get(&cache_key) {
                    Some(bundle) => Resolution::Resolved(bundle),
                    None => Resolution::PrimaryFetch,
                },
                Resolution::PrimaryFetch => match self.source.fetch_article(id).await {
                    Ok(articles) if !articles.is_empty() => {
                        let bundle = ArticleBundle::new(normalize_articles(articles));
                        self.article_cache.insert(&cache_key, bundle.clone(), None);
                        Resolution::Resolved(bundle)
                    }
                    Ok(_) => {
                        debug!("Primary tier has no article {id}, trying backup");
                        Resolution::BackupFetch
                    }
                    Err(e) => {
                        warn!("Primary fetch failed for article {id}: {e}");
                        Resolution::BackupFetch
                    }
                },
                Resolution::BackupFetch => match self.source.fetch_backup_article(id).await {
                    Ok(article) => {
                        let bundle = ArticleBundle::new(normalize_articles(vec![article]));
                        self.article_cache.insert(&cache_key, bundle.clone(), None);
                        Resolution::Resolved(bundle)
                    }
                    Err(e) => {
                        error!("Backup fetch failed for article {id}: {e}");
                        Resolution::Failed
                    }
                },
                Resolution::Resolved(bundle) => return Some(bundle),
                Resolution::Failed => return None,
            };
        }
    }

    /// Live entry counts for the listing and article caches.
    pub fn cache_entries(&self) -> (usize, usize) {
        (self.listing_cache.len(), self.article_cache.len())
    }
}

/// Normalizes image URLs across every article in a listing.
fn normalize_groups(mut groups: Vec<NewsGroup>) -> Vec<NewsGroup> {
    for group in &mut groups {
        for article in &mut group.articles {
            article.normalize_images();
        }
    }
    groups
}

/// Normalizes image URLs on a detail-tier article set.
fn normalize_articles(mut articles: Vec<Article>) -> Vec<Article> {
    for article in &mut articles {
        article.normalize_images();
    }
    articles
}

fn article_cache_key(id: &str) -> String {
    format!("article_{id}")
}
