//! HTTP implementation of the upstream content source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Article, NewsGroup};
use crate::domain::sources::{ContentSource, SourceError, SourceResult};

/// Success code inside the primary API envelope.
const ENVELOPE_OK: i64 = 200;

/// Wrapper shape around every primary API payload.
///
/// `data` stays optional so an error envelope without it still
/// deserializes and can be rejected with a precise message.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    code: i64,
    #[serde(default = "Option::default")]
    data: Option<T>,
}

/// HTTP client for the primary content API and the static backup tier.
///
/// One bounded request per call; trying again is the resolution service's
/// decision, expressed as a tier fallback rather than a retry.
pub struct HttpContentSource {
    client: Client,
    listing_url: String,
    detail_url: String,
    backup_base_url: String,
}

impl HttpContentSource {
    /// Builds the source from endpoint roots.
    ///
    /// `api_base` is the primary API origin; `backup_base_url` is the root
    /// of the per-article snapshot directory. Trailing slashes on either
    /// are tolerated. `timeout` bounds both connect and full-request time.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed (TLS
    /// backend initialization).
    pub fn new(api_base: &str, backup_base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        let api_base = api_base.trim_end_matches('/');
        Ok(Self {
            client,
            listing_url: format!("{api_base}/News/news-list"),
            detail_url: format!("{api_base}/News/news-detailvip"),
            backup_base_url: backup_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches `url` and unwraps the primary API envelope.
    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> SourceResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let envelope: Envelope<T> = response.json().await.map_err(classify_body)?;
        if envelope.code != ENVELOPE_OK {
            return Err(SourceError::Payload(format!(
                "envelope code {}",
                envelope.code
            )));
        }

        envelope
            .data
            .ok_or_else(|| SourceError::Payload("envelope carries no data field".to_string()))
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_listing(&self) -> SourceResult<Vec<NewsGroup>> {
        self.get_envelope(&self.listing_url).await
    }

    async fn fetch_article(&self, id: &str) -> SourceResult<Vec<Article>> {
        let url = format!("{}?id={}", self.detail_url, id);
        self.get_envelope(&url).await
    }

    async fn fetch_backup_article(&self, id: &str) -> SourceResult<Article> {
        let url = format!("{}/{}.json", self.backup_base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        // The backup tier serves a bare article object, no envelope.
        response.json::<Article>().await.map_err(classify_body)
    }
}

/// Maps transport-phase errors onto the source taxonomy.
fn classify_transport(err: reqwest::Error) -> SourceError {
    if err.is_timeout() || err.is_connect() {
        return SourceError::Network(err.to_string());
    }
    match err.status() {
        Some(status) => SourceError::Status(status.as_u16()),
        None => SourceError::Network(err.to_string()),
    }
}

/// Maps body-phase errors: decode failures are payload problems, anything
/// else (read timeout, reset) is a network problem.
fn classify_body(err: reqwest::Error) -> SourceError {
    if err.is_decode() {
        SourceError::Payload(err.to_string())
    } else {
        SourceError::Network(err.to_string())
    }
}
