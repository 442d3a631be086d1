//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating tenant
//! resolution, upstream fetches, and cache decisions. Services consume the
//! domain source trait and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::tenant_service::TenantService`] - Hostname to tenant resolution
//! - [`services::content_service::ContentService`] - Cached, tiered content resolution

pub mod services;
