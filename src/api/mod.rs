//! HTTP delivery layer for request/response handling.
//!
//! This layer translates HTTP requests into application operations and
//! renders the results as tenant-branded pages or JSON.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for JSON responses
//! - [`handlers`] - HTTP request handlers

pub mod dto;
pub mod handlers;
