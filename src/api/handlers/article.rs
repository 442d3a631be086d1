//! Handler for article pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

use crate::ads::{AdFragmentSet, fragment_set, header_scripts, inject_content_ads};
use crate::api::handlers::PAGE_CACHE_CONTROL;
use crate::api::handlers::error::cacheable_error_page;
use crate::state::AppState;
use crate::utils::article_id::article_id_from_slug;
use crate::utils::dates::format_publish_date;
use crate::utils::host::request_host;

/// Continue-reading section data for the article template.
pub struct SecondArticleView {
    pub headline: String,
    pub publish_date: String,
    pub content: String,
}

/// Template for the article page.
///
/// Renders `templates/article.html` with the ad-injected body and, when the
/// upstream supplied one, a hidden follow-up article behind the
/// continue-reading button.
#[derive(Template, WebTemplate)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub site_name: String,
    pub header_scripts: String,
    pub headline: String,
    pub publish_date: String,
    pub hero_image_url: String,
    pub content: String,
    pub second: Option<SecondArticleView>,
    pub ads: AdFragmentSet,
}

/// Renders an article page addressed by slug.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Resolve the tenant from the Host header
/// 2. Take the last 12 characters of the slug as the article id;
///    anything that is not 12 lowercase hex characters renders the
///    error page
/// 3. Resolve the article bundle (cache, primary, backup)
/// 4. Inject the tenant's paragraph ad fragments into the body
/// 5. Render, with the follow-up article when the bundle carries one
///
/// Bad slugs and missing articles answer with the error page at status
/// 200, keeping the response cacheable at the CDN.
pub async fn article_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let host = request_host(&headers);
    let tenant = state.tenants.resolve(&host);

    let Some(article_id) = article_id_from_slug(&slug) else {
        return cacheable_error_page(
            &tenant,
            &host,
            "Not Found",
            "This article does not exist or the URL is invalid.",
        );
    };

    let Some(bundle) = state.content.article(article_id).await else {
        return cacheable_error_page(&tenant, &host, "Not Found", "This article does not exist.");
    };

    let Some(primary) = bundle.primary() else {
        return cacheable_error_page(&tenant, &host, "Not Found", "This article does not exist.");
    };

    let ads = fragment_set(&tenant);
    let content = inject_content_ads(
        &primary.html_content,
        &ads.after_paragraph2,
        &ads.after_paragraph4,
    );

    let description = if primary.summary.is_empty() {
        primary.title.chars().take(160).collect()
    } else {
        primary.summary.clone()
    };

    let second = bundle.second().map(|article| SecondArticleView {
        headline: article.title.clone(),
        publish_date: format_publish_date(&article.published_at),
        content: article.html_content.clone(),
    });

    let template = ArticleTemplate {
        title: primary.title.clone(),
        description,
        canonical: format!("https://{host}/{slug}"),
        site_name: tenant.site_name.clone(),
        header_scripts: header_scripts(&tenant),
        headline: primary.title.clone(),
        publish_date: format_publish_date(&primary.published_at),
        hero_image_url: primary.avatar_image_url.clone(),
        content,
        second,
        ads,
    };

    ([(header::CACHE_CONTROL, PAGE_CACHE_CONTROL)], template).into_response()
}
