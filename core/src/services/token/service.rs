//! Main token service implementation

use std::sync::{Arc, Mutex, PoisonError};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, info};

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, DomainResult, TokenError};

use super::config::TokenServiceConfig;
use super::store::TokenStore;

/// Service managing the bearer-token lifecycle for authenticated principals.
///
/// Tokens are HS256-signed JWTs carrying only the subject (principal email)
/// and the validity window. The single currently-active token per principal
/// lives in the injected [`TokenStore`]; expired entries are cleaned up
/// lazily on the issue and invalidate paths, there is no background sweep.
pub struct TokenService {
    store: Arc<TokenStore>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Serializes the check-then-store sequence in [`Self::issue_token`] so
    /// concurrent logins for one account observe a single token.
    issue_lock: Mutex<()>,
}

impl TokenService {
    /// Creates a new token service over the given store
    pub fn new(store: Arc<TokenStore>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Expiry is inspected by the service itself so that expired tokens
        // still decode; the library only checks the signature and structure.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Self {
            store,
            config,
            encoding_key,
            decoding_key,
            validation,
            issue_lock: Mutex::new(()),
        }
    }

    /// Issues a token for the given subject, or returns the cached one if it
    /// has not expired yet.
    ///
    /// Re-issuance within the validity window is idempotent: rapid repeated
    /// logins keep returning the same token string. An expired cached token
    /// is evicted before a fresh one is minted.
    pub fn issue_token(&self, subject: &str) -> DomainResult<String> {
        let _guard = self
            .issue_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = self.store.get(subject) {
            match self.decode_claims(&existing) {
                Ok(claims) if !claims.is_expired() => {
                    debug!(subject, "returning cached token");
                    return Ok(existing);
                }
                // Expired, or unreadable after a secret rotation: evict.
                _ => self.store.remove(subject),
            }
        }

        self.mint_and_store(Claims::with_ttl_seconds(subject, self.config.token_ttl_seconds))
    }

    /// Extracts the subject claim after verifying the signature
    ///
    /// # Errors
    ///
    /// [`TokenError::MalformedToken`] if the token cannot be parsed or its
    /// signature fails verification.
    pub fn extract_subject(&self, token: &str) -> DomainResult<String> {
        Ok(self.decode_claims(token)?.sub)
    }

    /// Checks whether the token's expiry lies strictly in the past
    ///
    /// # Errors
    ///
    /// [`TokenError::MalformedToken`] on an unparseable or unsigned token.
    pub fn is_expired(&self, token: &str) -> DomainResult<bool> {
        Ok(self.decode_claims(token)?.is_expired())
    }

    /// Validates the token against the expected subject
    ///
    /// Returns `true` only if the subject claim matches and the token has
    /// not expired. Called by the authentication filter on every request.
    pub fn validate(&self, token: &str, expected_subject: &str) -> DomainResult<bool> {
        let claims = self.decode_claims(token)?;
        Ok(claims.sub == expected_subject && !claims.is_expired())
    }

    /// Invalidates the active token for the principal the token names
    ///
    /// Deliberately not idempotent: logging out a session that is already
    /// gone (or whose cached token has expired) is a credential error, so a
    /// second invalidation of the same logical session fails.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidToken`] when the subject cannot be extracted,
    /// [`AuthError::NotLoggedIn`] when no active cached token exists.
    pub fn invalidate(&self, token: &str) -> DomainResult<()> {
        let subject = self
            .extract_subject(token)
            .map_err(|_| AuthError::InvalidToken)?;

        let active = match self.store.get(&subject) {
            Some(cached) => !self
                .decode_claims(&cached)
                .map(|claims| claims.is_expired())
                .unwrap_or(true),
            None => false,
        };

        if !active {
            return Err(AuthError::NotLoggedIn { subject }.into());
        }

        self.store.remove(&subject);
        info!(subject, "token invalidated");
        Ok(())
    }

    /// Issues a token with an arbitrary lifetime in seconds, bypassing the
    /// cached-token check. Test hook for expiry scenarios.
    #[cfg(test)]
    pub(crate) fn issue_token_with_ttl(
        &self,
        subject: &str,
        ttl_seconds: i64,
    ) -> DomainResult<String> {
        self.mint_and_store(Claims::with_ttl_seconds(subject, ttl_seconds))
    }

    /// Signs the claims and records the result as the subject's current token
    fn mint_and_store(&self, claims: Claims) -> DomainResult<String> {
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;
        self.store.save(&claims.sub, &token);
        info!(subject = %claims.sub, "token issued");
        Ok(token)
    }

    /// Decodes and signature-checks a token
    fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::MalformedToken)
    }
}
