//! Source trait definitions for the domain layer.
//!
//! This module defines the interfaces that abstract upstream content
//! access. Concrete implementations live in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for upstream operations
//! - Implementations live in `crate::infrastructure::upstream`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Sources
//!
//! - [`ContentSource`] - Listing feed, article detail, backup snapshots

pub mod content_source;

pub use content_source::{ContentSource, SourceError, SourceResult};

#[cfg(test)]
pub use content_source::MockContentSource;
