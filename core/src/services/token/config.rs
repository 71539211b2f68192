//! Configuration for the token service

use marketplace_shared::JwtConfig;

use crate::domain::entities::token::TOKEN_TTL_HOURS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            token_ttl_seconds: TOKEN_TTL_HOURS * 3600,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            token_ttl_seconds: config.token_ttl_hours * 3600,
        }
    }
}
