//! Business logic services for the application layer.

pub mod content_service;
pub mod tenant_service;

pub use content_service::ContentService;
pub use tenant_service::TenantService;
