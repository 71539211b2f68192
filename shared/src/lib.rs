//! Shared utilities and common types for the marketplace server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes and response structures
//! - HTTP header conventions for bearer tokens

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, JwtConfig};
pub use errors::error_codes;
pub use types::{ApiResponse, ErrorResponse};
pub use utils::http::{strip_bearer, AUTHORIZATION_HEADER, BEARER_PREFIX};
