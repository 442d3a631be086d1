//! Tenant hostname extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Extracts the raw `Host` header value for tenant resolution.
///
/// The port is kept: tenant registry keys may include one (local
/// development registers `localhost:3000` explicitly). A missing or
/// non-UTF-8 header yields an empty string, which resolves to the default
/// tenant configuration downstream.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "topnews.daily24.blog".parse().unwrap());
///
/// assert_eq!(request_host(&headers), "topnews.daily24.blog");
/// ```
pub fn request_host(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
