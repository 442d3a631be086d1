//! Source trait for upstream news content access.

use crate::domain::entities::{Article, NewsGroup};
use async_trait::async_trait;

/// Errors an upstream fetch can produce.
///
/// Every variant is a fallback transition inside the resolution service;
/// none of them crosses the service's public boundary.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Connect failure, timeout, or any other transport-level error.
    #[error("Upstream network error: {0}")]
    Network(String),

    /// The upstream answered with a non-success HTTP status.
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected envelope.
    #[error("Malformed upstream payload: {0}")]
    Payload(String),
}

/// Convenience result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Interface to the remote news content tiers.
///
/// The primary tier serves the listing feed and article detail; the backup
/// tier serves per-article static snapshots. Implementations bound every
/// call with the configured upstream timeout.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpContentSource`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/handler_article.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches the grouped listing feed from the primary tier.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Network`] on transport failures or timeout,
    /// [`SourceError::Status`] on non-success responses, and
    /// [`SourceError::Payload`] when the envelope is malformed.
    async fn fetch_listing(&self) -> SourceResult<Vec<NewsGroup>>;

    /// Fetches article detail from the primary tier.
    ///
    /// An empty vector is a successful answer meaning the upstream knows no
    /// such article; the caller decides whether to try the backup tier.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ContentSource::fetch_listing`].
    async fn fetch_article(&self, id: &str) -> SourceResult<Vec<Article>>;

    /// Fetches a single article snapshot from the static backup tier.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ContentSource::fetch_listing`]; a missing
    /// snapshot surfaces as [`SourceError::Status`] with 404.
    async fn fetch_backup_article(&self, id: &str) -> SourceResult<Article>;
}
