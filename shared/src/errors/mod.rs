//! Stable error codes shared between the domain core and the HTTP boundary
//!
//! The core only raises tagged error values; the presentation layer maps
//! these codes to HTTP statuses (401/403/404/500). Codes are string
//! constants so the mapping never relies on message matching.

/// Error code constants for programmatic handling
pub mod error_codes {
    /// Token cannot be parsed or its signature fails verification (401)
    pub const MALFORMED_TOKEN: &str = "MALFORMED_TOKEN";

    /// Invalidation requested without an active session (401)
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";

    /// The referenced resource or its owning chain does not exist (404)
    pub const OWNER_NOT_FOUND: &str = "OWNER_NOT_FOUND";

    /// Principal is neither owner nor admin (403)
    pub const ACCESS_DENIED: &str = "ACCESS_DENIED";

    /// Unexpected internal failure (500)
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
