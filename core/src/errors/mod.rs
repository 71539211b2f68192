//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AccessError, AuthError, TokenError};

use marketplace_shared::ErrorResponse;
use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Every failure in the core is terminal for the request; nothing is
/// retried internally. The HTTP boundary maps each kind to a status code
/// through its error code, never by matching message text.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Access(#[from] AccessError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        use marketplace_shared::error_codes;

        let code = match err {
            DomainError::NotFound { .. } => error_codes::OWNER_NOT_FOUND,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Token(e) => e.error_code(),
            DomainError::Auth(e) => e.error_code(),
            DomainError::Access(e) => e.error_code(),
        };

        ErrorResponse::new(code, err.to_string())
    }
}
