//! Utility functions for article identifiers, URLs, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`article_id`] - Article identifier extraction and validation
//! - [`dates`] - Publish date formatting for templates
//! - [`host`] - Tenant hostname extraction from HTTP headers
//! - [`image_url`] - Upstream image URL normalization
//! - [`slug`] - Article teaser URL slugs

pub mod article_id;
pub mod dates;
pub mod host;
pub mod image_url;
pub mod slug;
