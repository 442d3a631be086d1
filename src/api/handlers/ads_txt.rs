//! Handler for per-tenant `ads.txt`.

use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::state::AppState;
use crate::utils::host::request_host;

/// Cache policy for `ads.txt`: one day, ad-network crawlers poll slowly.
const ADS_TXT_CACHE_CONTROL: &str = "public, max-age=86400";

/// Serves the tenant's `ads.txt`.
///
/// # Endpoint
///
/// `GET /ads.txt`
///
/// # Request Flow
///
/// 1. Lowercase the Host header
/// 2. Serve `{ads_dir}/{host}.txt` when the file exists
/// 3. Otherwise generate a default from the tenant's display ad client id
///
/// The generated default carries the standard seller line plus a comment
/// naming the host, so a freshly pointed domain passes crawler checks
/// before its file is deployed.
pub async fn ads_txt_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let host = request_host(&headers).to_ascii_lowercase();

    let body = match read_tenant_file(&state, &host).await {
        Some(content) => content,
        None => {
            debug!("No ads.txt file for {host}, serving generated default");
            generated_ads_txt(&state, &host)
        }
    };

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, ADS_TXT_CACHE_CONTROL),
        ],
        body,
    )
}

/// Reads the per-host file, if the host names a safe path and the file
/// exists.
async fn read_tenant_file(state: &AppState, host: &str) -> Option<String> {
    // The host is client input; it must never name a path outside the
    // ads directory.
    if !is_safe_host(host) {
        return None;
    }

    let path = state.ads_dir.join(format!("{host}.txt"));
    tokio::fs::read_to_string(&path).await.ok()
}

/// Builds the default ads.txt body for a host with no deployed file.
fn generated_ads_txt(state: &AppState, host: &str) -> String {
    let tenant = state.tenants.resolve(host);

    let mut body = String::new();
    if !tenant.ads.display_client_id.is_empty() {
        body.push_str(&format!(
            "google.com, pub-{}, DIRECT, f08c47fec0942fa0\n",
            tenant.ads.display_client_id
        ));
    }
    body.push_str(&format!("# Ads.txt for {host}\n"));
    body
}

/// Hostname characters that may appear in an ads file name.
fn is_safe_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':'))
}
