//! Handlers for the static info pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, header},
    response::IntoResponse,
};

use crate::api::handlers::PAGE_CACHE_CONTROL;
use crate::state::AppState;
use crate::utils::host::request_host;

/// Template for static info pages.
///
/// Renders `templates/page.html` with a heading and a trusted HTML body.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub site_name: String,
    pub header_scripts: String,
    pub heading: String,
    pub body: String,
}

const CONTACT_BODY: &str = "\
<p>Have a question, a correction, or a news tip? We would love to hear from you.</p>\
<p>Reach the editorial team through the address in the site footer and we will get \
back to you as soon as possible.</p>";

const TERMS_BODY: &str = "\
<p>By accessing this website you agree to use its content for personal, \
non-commercial purposes only. Articles, images and other material remain the \
property of their respective owners.</p>\
<p>Content is provided as is, without warranty of any kind. We may change or \
discontinue any part of the service at any time without notice.</p>";

const PRIVACY_BODY: &str = "\
<p>This website uses cookies to measure traffic and to serve advertising through \
third-party networks. Those networks may use cookies and similar technologies to \
show ads based on your prior visits to this and other websites.</p>\
<p>We do not collect personal information beyond standard server logs, and we do \
not sell or share reader data with anyone.</p>";

/// Renders the contact page.
///
/// # Endpoint
///
/// `GET /page/contact`
pub async fn contact_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    render_page(
        &state,
        &headers,
        "contact",
        "Contact Us",
        "Contact us for any inquiries",
        CONTACT_BODY,
    )
}

/// Renders the terms page.
///
/// # Endpoint
///
/// `GET /page/terms`
pub async fn terms_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    render_page(
        &state,
        &headers,
        "terms",
        "Terms & Conditions",
        "Terms and conditions of use",
        TERMS_BODY,
    )
}

/// Renders the privacy page.
///
/// # Endpoint
///
/// `GET /page/privacy`
pub async fn privacy_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    render_page(
        &state,
        &headers,
        "privacy",
        "Privacy Policy",
        "Our privacy policy",
        PRIVACY_BODY,
    )
}

fn render_page(
    state: &AppState,
    headers: &HeaderMap,
    path: &str,
    heading: &str,
    description: &str,
    body: &str,
) -> ([(HeaderName, &'static str); 1], PageTemplate) {
    let host = request_host(headers);
    let tenant = state.tenants.resolve(&host);

    let template = PageTemplate {
        title: format!("{} - {}", heading, tenant.site_name),
        description: description.to_string(),
        canonical: format!("https://{host}/page/{path}"),
        header_scripts: crate::ads::header_scripts(&tenant),
        site_name: tenant.site_name,
        heading: heading.to_string(),
        body: body.to_string(),
    };

    ([(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)], template)
}
