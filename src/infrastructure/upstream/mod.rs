//! Upstream HTTP adapters for the content source port.

mod http_source;

pub use http_source::HttpContentSource;
