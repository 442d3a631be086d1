//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures of the news
//! delivery service. Entities are plain data structures without business
//! logic.
//!
//! # Entity Types
//!
//! - [`Article`] - A news article in its normalized form
//! - [`NewsGroup`] / [`Listing`] - The grouped home-page feed
//! - [`ArticleBundle`] - The resolution result for one article id
//! - [`TenantConfig`] / [`TenantRegistry`] - Per-hostname configuration
//!
//! All entities include unit tests demonstrating their construction and
//! usage.

pub mod article;
pub mod tenant;

pub use article::{Article, ArticleBundle, Listing, NewsGroup};
pub use tenant::{AdNetworkIds, TenantConfig, TenantRegistry, TenantSettings};
