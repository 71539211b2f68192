//! Error type definitions for token and authorization operations.

use thiserror::Error;

use crate::domain::value_objects::ResourceType;
use marketplace_shared::error_codes;

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is malformed or its signature is invalid")]
    MalformedToken,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Stable error code for the HTTP boundary
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::MalformedToken => error_codes::MALFORMED_TOKEN,
            TokenError::GenerationFailed => error_codes::INTERNAL_ERROR,
        }
    }
}

/// Authentication session errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token provided")]
    InvalidToken,

    #[error("User {subject} is not logged in or the token has already expired")]
    NotLoggedIn { subject: String },
}

impl AuthError {
    /// Stable error code for the HTTP boundary
    ///
    /// Both variants are credential failures as far as clients are
    /// concerned; they only differ in what the server logs.
    pub fn error_code(&self) -> &'static str {
        error_codes::INVALID_CREDENTIALS
    }
}

/// Authorization errors raised by the access decision point
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccessError {
    #[error("Resource owner not found for {resource} with id {resource_id}")]
    OwnerNotFound {
        resource: ResourceType,
        resource_id: i64,
    },

    #[error("Access denied to {resource} with id {resource_id}")]
    AccessDenied {
        resource: ResourceType,
        resource_id: i64,
    },
}

impl AccessError {
    /// Stable error code for the HTTP boundary
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::OwnerNotFound { .. } => error_codes::OWNER_NOT_FOUND,
            AccessError::AccessDenied { .. } => error_codes::ACCESS_DENIED,
        }
    }
}
