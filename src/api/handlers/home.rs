//! Handler for the grouped home-page listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};

use crate::api::handlers::PAGE_CACHE_CONTROL;
use crate::domain::entities::Listing;
use crate::state::AppState;
use crate::utils::host::request_host;

/// Template for the home page.
///
/// Renders `templates/home.html`: article teasers grouped by category, or
/// the empty state when the listing is degraded.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub site_name: String,
    pub header_scripts: String,
    pub listing: Listing,
}

/// Renders the home page for the resolved tenant.
///
/// # Endpoint
///
/// `GET /`
///
/// # Request Flow
///
/// 1. Resolve the tenant from the Host header
/// 2. Resolve the listing (cache, then primary API)
/// 3. Render grouped teasers, or the empty state on a degraded listing
///
/// A degraded listing still renders with status 200; the CDN keeps serving
/// its cached copy while the upstream recovers.
pub async fn home_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let host = request_host(&headers);
    let tenant = state.tenants.resolve(&host);
    let listing = state.content.listing().await;

    let template = HomeTemplate {
        title: format!("{} - Latest News", tenant.site_name),
        description: "The latest NFL, WNBA and entertainment headlines, updated around the clock."
            .to_string(),
        canonical: format!("https://{host}/"),
        header_scripts: crate::ads::header_scripts(&tenant),
        site_name: tenant.site_name,
        listing,
    };

    ([(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)], template)
}
