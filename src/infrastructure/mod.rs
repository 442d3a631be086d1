//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for upstream content access and caching.
//!
//! # Modules
//!
//! - [`cache`] - In-memory TTL caching for resolved content
//! - [`upstream`] - HTTP clients for the primary API and the backup tier

pub mod cache;
pub mod upstream;
