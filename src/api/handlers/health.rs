//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Components Checked
///
/// 1. **Tenant registry**: configured tenant count
/// 2. **Listing cache**: live entry count
/// 3. **Article cache**: live entry count
///
/// The service holds no connections, so health is always 200; the check
/// payload is for dashboards and deploy probes.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "tenant_registry": { "status": "ok", "message": "13 tenants" },
///     "listing_cache": { "status": "ok", "message": "1 entries" },
///     "article_cache": { "status": "ok", "message": "42 entries" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let (listing_entries, article_entries) = state.content.cache_entries();
    let tenant_count = state.tenants.registry().len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            tenant_registry: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{tenant_count} tenants")),
            },
            listing_cache: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{listing_entries} entries")),
            },
            article_cache: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{article_entries} entries")),
            },
        },
    })
}
