//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized by concern:
//! - `auth` - JWT signing and token lifetime configuration

pub mod auth;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
