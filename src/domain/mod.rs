//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain model following Clean
//! Architecture principles. It defines entities and source interfaces
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`sources`] - Upstream content access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Source traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod sources;
