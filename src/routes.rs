//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`              - Grouped home-page listing
//! - `GET /{slug}`        - Article page (last 12 slug characters = id)
//! - `GET /ads.txt`       - Per-tenant ads.txt with generated fallback
//! - `GET /page/contact`  - Contact info page
//! - `GET /page/terms`    - Terms info page
//! - `GET /page/privacy`  - Privacy info page
//! - `GET /health`        - Component status JSON
//! - `/static/*`          - Static assets from `public/`
//! - anything else        - Branded 404 page
//!
//! # Middleware
//!
//! - **Tracing** - request spans at INFO with millisecond latency
//! - **Path normalization** - trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{
    ads_txt_handler, article_handler, contact_page_handler, health_handler, home_handler,
    not_found_handler, privacy_page_handler, terms_page_handler,
};
use crate::state::AppState;

/// Constructs the routed application without the path-normalization wrapper.
///
/// Fixed paths (`/ads.txt`, `/health`, `/page/*`) win over the `/{slug}`
/// article route; everything unmatched falls through to the 404 page.
/// Handler tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/ads.txt", get(ads_txt_handler))
        .route("/page/contact", get(contact_page_handler))
        .route("/page/terms", get(terms_page_handler))
        .route("/page/privacy", get(privacy_page_handler))
        .route("/{slug}", get(article_handler))
        .nest_service("/static", ServeDir::new("public"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// Wraps the router in trailing-slash normalization.
///
/// The wrapper sits outside the [`Router`] because it must rewrite the
/// path before route matching sees it.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
