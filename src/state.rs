//! Shared application state injected into request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{ContentService, TenantService};

/// State shared across all handlers.
///
/// Cloned per request by axum; every field is either an `Arc` or cheap to
/// clone.
#[derive(Clone)]
pub struct AppState {
    pub tenants: Arc<TenantService>,
    pub content: Arc<ContentService>,
    /// Directory of per-hostname `ads.txt` files.
    pub ads_dir: PathBuf,
}

impl AppState {
    /// Creates the shared state.
    pub fn new(
        tenants: Arc<TenantService>,
        content: Arc<ContentService>,
        ads_dir: PathBuf,
    ) -> Self {
        Self {
            tenants,
            content,
            ads_dir,
        }
    }
}
