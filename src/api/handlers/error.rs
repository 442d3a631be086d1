//! Error page rendering and the catch-all 404 handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::handlers::PAGE_CACHE_CONTROL;
use crate::domain::entities::TenantConfig;
use crate::state::AppState;
use crate::utils::host::request_host;

/// Template for the shared error page.
///
/// Renders `templates/error.html` inside the tenant-branded layout.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub site_name: String,
    pub header_scripts: String,
    pub heading: String,
    pub message: String,
}

/// Builds the branded error page for a resolved tenant.
///
/// Used both by the catch-all 404 and by content routes that render a
/// not-found message with a cacheable 200 status.
pub fn error_template(
    tenant: &TenantConfig,
    host: &str,
    heading: &str,
    message: &str,
) -> ErrorTemplate {
    ErrorTemplate {
        title: format!("{} - {}", heading, tenant.site_name),
        description: message.to_string(),
        canonical: format!("https://{host}/"),
        site_name: tenant.site_name.clone(),
        header_scripts: crate::ads::header_scripts(tenant),
        heading: heading.to_string(),
        message: message.to_string(),
    }
}

/// Renders the error page with a 200 status and page cache headers.
///
/// Content routes answer bad slugs and missing articles this way so the
/// CDN can cache the response like any other page.
pub fn cacheable_error_page(
    tenant: &TenantConfig,
    host: &str,
    heading: &str,
    message: &str,
) -> Response {
    (
        [(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)],
        error_template(tenant, host, heading, message),
    )
        .into_response()
}

/// Catch-all for routes no other handler matched.
///
/// # Endpoint
///
/// Any method or path outside the configured routes.
///
/// # Response
///
/// The branded error page with status 404.
pub async fn not_found_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let host = request_host(&headers);
    let tenant = state.tenants.resolve(&host);

    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)],
        error_template(
            &tenant,
            &host,
            "Not Found",
            "The page you are looking for does not exist.",
        ),
    )
        .into_response()
}
