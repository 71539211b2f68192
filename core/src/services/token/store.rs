//! In-process cache of each principal's current token.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

/// Thread-safe map from principal email to the single active token string.
///
/// Explicitly constructed and injected wherever it is needed, so tests can
/// run against independent instances. Holds at most one entry per subject;
/// nothing outside the token service mutates it.
#[derive(Debug, Default)]
pub struct TokenStore {
    tokens: RwLock<HashMap<String, String>>,
}

impl TokenStore {
    /// Create a new, empty token store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token for a subject, replacing any prior entry
    pub fn save(&self, subject: &str, token: &str) {
        let mut tokens = self
            .tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        tokens.insert(subject.to_string(), token.to_string());
        debug!(subject, "token added to cache");
    }

    /// Get the current token for a subject, if any
    pub fn get(&self, subject: &str) -> Option<String> {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        tokens.get(subject).cloned()
    }

    /// Remove the token for a subject; a no-op when absent
    pub fn remove(&self, subject: &str) {
        let mut tokens = self
            .tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if tokens.remove(subject).is_some() {
            debug!(subject, "token removed from cache");
        }
    }

    /// Number of cached tokens
    pub fn len(&self) -> usize {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        tokens.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
