//! # NewsEdge
//!
//! A multi-tenant news delivery service with per-tenant advertising, built
//! with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, the tenant registry, and
//!   the upstream source trait
//! - **Application Layer** ([`application`]) - Tenant resolution and the
//!   cached, tiered content resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory TTL caches and
//!   the HTTP upstream client
//! - **API Layer** ([`api`]) - Request handlers and response DTOs
//! - **Ads** ([`ads`]) - Tenant ad fragment builders and the paragraph
//!   injector
//!
//! ## Features
//!
//! - One deployment serves many hostnames, each with its own branding and
//!   ad-network identifiers
//! - Unknown hostnames get a generated configuration, so pointing a new
//!   domain at the service needs no deploy
//! - Article resolution falls back from cache to the primary API to a
//!   static backup tier
//! - CDN-friendly responses: long cache headers, error pages that still
//!   answer 200 on content routes
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional; see the config module for defaults
//! export LISTEN="0.0.0.0:3000"
//! export NEWS_API_BASE="https://apisport.vbonews.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod ads;
pub mod config;
pub mod server;

pub mod routes;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContentService, TenantService};
    pub use crate::domain::entities::{
        Article, ArticleBundle, Listing, NewsGroup, TenantConfig, TenantRegistry,
    };
    pub use crate::domain::sources::{ContentSource, SourceError, SourceResult};
    pub use crate::state::AppState;
}
