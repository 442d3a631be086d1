//! HTTP server initialization and runtime setup.
//!
//! Handles tenant registry loading, upstream client and cache construction,
//! sweeper spawning, and the Axum server lifecycle.

use crate::application::services::{ContentService, TenantService};
use crate::config::Config;
use crate::domain::entities::TenantRegistry;
use crate::infrastructure::cache::TtlCache;
use crate::infrastructure::upstream::HttpContentSource;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Sweep period for the listing cache, a fraction of its 300s default TTL.
const LISTING_SWEEP_PERIOD: Duration = Duration::from_secs(60);

/// Sweep period for the article cache, a fraction of its 600s default TTL.
const ARTICLE_SWEEP_PERIOD: Duration = Duration::from_secs(120);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Tenant registry (built-in table or `TENANTS_FILE`)
/// - Upstream HTTP source with the configured timeout
/// - Listing and article caches plus their background sweepers
/// - Axum HTTP server with graceful ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The tenant registry file cannot be read or parsed
/// - The HTTP client cannot be constructed
/// - The server bind fails or a runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = load_registry(&config)?;
    let tenants = Arc::new(TenantService::new(registry));

    let source = HttpContentSource::new(
        &config.news_api_base,
        &config.backup_base_url,
        Duration::from_millis(config.upstream_timeout_ms),
    )?;

    let listing_cache = Arc::new(TtlCache::new(
        "news_list",
        Duration::from_secs(config.listing_cache_ttl),
    ));
    let article_cache = Arc::new(TtlCache::new(
        "articles",
        Duration::from_secs(config.article_cache_ttl),
    ));

    listing_cache.spawn_sweeper(LISTING_SWEEP_PERIOD);
    article_cache.spawn_sweeper(ARTICLE_SWEEP_PERIOD);
    tracing::info!("Cache sweepers started");

    let content = Arc::new(ContentService::new(
        Arc::new(source),
        listing_cache,
        article_cache,
    ));

    let state = AppState::new(tenants, content, config.ads_dir.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Loads the tenant registry from `TENANTS_FILE` or the built-in table.
fn load_registry(config: &Config) -> Result<TenantRegistry> {
    match &config.tenants_file {
        Some(path) => {
            let registry = TenantRegistry::from_path(path)?;
            tracing::info!(
                "Tenant registry loaded from {} ({} tenants)",
                path.display(),
                registry.len()
            );
            Ok(registry)
        }
        None => {
            let registry = TenantRegistry::builtin();
            tracing::info!("Using built-in tenant registry ({} tenants)", registry.len());
            Ok(registry)
        }
    }
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install shutdown signal handler");
    tracing::info!("Shutdown signal received, draining connections");
}
