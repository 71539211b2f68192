//! Token service module for the bearer-token lifecycle
//!
//! This module handles all token-related operations:
//! - JWT issuance with the at-most-one-active-token-per-principal rule
//! - Signature verification and claim extraction
//! - Per-request validation against the expected principal
//! - Invalidation on logout
//! - The in-process cache holding each principal's current token

mod config;
mod service;
mod store;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use store::TokenStore;
