//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token lifetime (10 hours)
pub const TOKEN_TTL_HOURS: i64 = 10;

/// Claims structure for the JWT payload
///
/// Deliberately minimal: the subject identifies the principal by email and
/// the timestamps bound the validity window. No other claims are embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal email)
    pub sub: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for the given subject with the standard lifetime
    pub fn new(subject: impl Into<String>) -> Self {
        Self::with_ttl_seconds(subject, TOKEN_TTL_HOURS * 3600)
    }

    /// Creates new claims expiring `ttl_seconds` from now
    ///
    /// A negative value produces already-expired claims, which the expiry
    /// tests rely on.
    pub fn with_ttl_seconds(subject: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// Expiry is strict: a token whose `exp` equals the current second is
    /// still valid.
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_carry_standard_ttl() {
        let claims = Claims::new("alice@example.com");

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let claims = Claims::with_ttl_seconds("alice@example.com", -60);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization_shape() {
        let claims = Claims::new("alice@example.com");
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["sub"], "alice@example.com");
        assert!(json.get("iat").is_some());
        assert!(json.get("exp").is_some());
        // No extra claims beyond subject and timestamps
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
