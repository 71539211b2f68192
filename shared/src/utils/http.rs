//! Bearer-token HTTP header conventions
//!
//! Tokens travel in the `Authorization: Bearer <token>` header on requests
//! and are returned the same way on login. Existing clients depend on this
//! exact shape, so the prefix handling lives here in one place.

/// Header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Scheme prefix preceding the token value, including the separator space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Strips the bearer scheme prefix from an `Authorization` header value.
///
/// Returns `None` when the value does not carry the bearer scheme.
pub fn strip_bearer(header_value: &str) -> Option<&str> {
    header_value.strip_prefix(BEARER_PREFIX)
}
