//! Business services containing domain logic and use cases.

pub mod authorization;
pub mod token;

// Re-export commonly used types
pub use authorization::{AccessAuthorizer, OwnerLookup, ResourceOwnerResolver};
pub use token::{TokenService, TokenServiceConfig, TokenStore};
