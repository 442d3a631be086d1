//! Caching layer for resolved upstream content.
//!
//! The application keeps two independent [`TtlCache`] instances, one for
//! the listing feed and one for article detail, so their key spaces and
//! TTLs never interact.

mod memory;

pub use memory::TtlCache;
