//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `NEWS_API_BASE` - Primary content API origin
//!   (default: `https://apisport.vbonews.com`)
//! - `BACKUP_BASE_URL` - Static backup snapshot root
//!   (default: `https://file.lifenews247.com/sportnews/backup`)
//! - `UPSTREAM_TIMEOUT_MS` - Per-request upstream timeout (default: 5000)
//! - `LISTING_CACHE_TTL` - Home listing cache TTL in seconds (default: 300)
//! - `ARTICLE_CACHE_TTL` - Article cache TTL in seconds (default: 600)
//! - `TENANTS_FILE` - Path to a tenant registry JSON file; replaces the
//!   built-in registry when set
//! - `ADS_DIR` - Directory of per-tenant `ads.txt` files (default: `public/ads`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Origin of the primary content API, no trailing slash required.
    pub news_api_base: String,
    /// Root of the per-article backup snapshot directory.
    pub backup_base_url: String,
    /// Timeout in milliseconds applied to every upstream request, both
    /// connect and total.
    pub upstream_timeout_ms: u64,
    /// TTL in seconds for the cached home listing.
    pub listing_cache_ttl: u64,
    /// TTL in seconds for cached article bundles.
    pub article_cache_ttl: u64,
    /// Tenant registry file. `None` means the built-in registry.
    pub tenants_file: Option<PathBuf>,
    /// Directory holding per-hostname `ads.txt` files.
    pub ads_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default; unparsable numeric values silently
    /// fall back to their default.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let news_api_base = env::var("NEWS_API_BASE")
            .unwrap_or_else(|_| "https://apisport.vbonews.com".to_string());

        let backup_base_url = env::var("BACKUP_BASE_URL")
            .unwrap_or_else(|_| "https://file.lifenews247.com/sportnews/backup".to_string());

        let upstream_timeout_ms = env::var("UPSTREAM_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5_000);

        let listing_cache_ttl = env::var("LISTING_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let article_cache_ttl = env::var("ARTICLE_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let tenants_file = env::var("TENANTS_FILE").ok().map(PathBuf::from);

        let ads_dir = env::var("ADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public/ads"));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            news_api_base,
            backup_base_url,
            upstream_timeout_ms,
            listing_cache_ttl,
            article_cache_ttl,
            tenants_file,
            ads_dir,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - an upstream base is not an http(s) URL
    /// - a timeout or TTL is outside its allowed range
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_http_base("NEWS_API_BASE", &self.news_api_base)?;
        validate_http_base("BACKUP_BASE_URL", &self.backup_base_url)?;

        if self.upstream_timeout_ms < 100 || self.upstream_timeout_ms > 60_000 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_MS must be between 100 and 60000, got {}",
                self.upstream_timeout_ms
            );
        }

        if self.listing_cache_ttl == 0 {
            anyhow::bail!("LISTING_CACHE_TTL must be greater than 0");
        }

        if self.article_cache_ttl == 0 {
            anyhow::bail!("ARTICLE_CACHE_TTL must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Primary API: {}", self.news_api_base);
        tracing::info!("  Backup tier: {}", self.backup_base_url);
        tracing::info!("  Upstream timeout: {}ms", self.upstream_timeout_ms);
        tracing::info!(
            "  Cache TTLs: listing {}s, article {}s",
            self.listing_cache_ttl,
            self.article_cache_ttl
        );

        match &self.tenants_file {
            Some(path) => tracing::info!("  Tenant registry: {}", path.display()),
            None => tracing::info!("  Tenant registry: built-in"),
        }

        tracing::info!("  Ads directory: {}", self.ads_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Checks that a configured base is an absolute http(s) URL.
fn validate_http_base(var: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| anyhow::anyhow!("{var} must be a valid URL, got '{value}': {e}"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{var} must use http or https, got '{value}'");
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
