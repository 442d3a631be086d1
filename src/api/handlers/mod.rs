//! HTTP request handlers for page and service endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod ads_txt;
pub mod article;
pub mod error;
pub mod health;
pub mod home;
pub mod pages;

pub use ads_txt::ads_txt_handler;
pub use article::article_handler;
pub use error::not_found_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use pages::{contact_page_handler, privacy_page_handler, terms_page_handler};

/// Cache policy for rendered pages: a short browser TTL, a longer CDN TTL,
/// and a stale window so the CDN keeps serving while it revalidates.
pub(crate) const PAGE_CACHE_CONTROL: &str =
    "public, max-age=60, s-maxage=300, stale-while-revalidate=600";
