//! # Marketplace Core
//!
//! Core business logic and domain layer for the marketplace backend.
//! This crate contains the authentication-token lifecycle (issuance,
//! caching, validation, invalidation) and the resource-ownership
//! authorization decision point, together with the repository interfaces
//! the surrounding layers implement.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
