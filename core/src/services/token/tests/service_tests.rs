//! Unit tests for the token service

use std::sync::Arc;
use std::thread;

use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig, TokenStore};

const SUBJECT: &str = "alice@example.com";

fn create_test_service() -> (Arc<TokenStore>, TokenService) {
    let store = Arc::new(TokenStore::new());
    let service = TokenService::new(store.clone(), TokenServiceConfig::default());
    (store, service)
}

#[test]
fn test_issue_token_is_idempotent_within_validity_window() {
    let (store, service) = create_test_service();

    let first = service.issue_token(SUBJECT).unwrap();
    let second = service.issue_token(SUBJECT).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_expired_token_triggers_reissue() {
    let (store, service) = create_test_service();

    let expired = service.issue_token_with_ttl(SUBJECT, -60).unwrap();
    let fresh = service.issue_token(SUBJECT).unwrap();

    assert_ne!(expired, fresh);
    assert!(!service.is_expired(&fresh).unwrap());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_extract_subject_roundtrip() {
    let (_, service) = create_test_service();

    let token = service.issue_token(SUBJECT).unwrap();
    assert_eq!(service.extract_subject(&token).unwrap(), SUBJECT);
}

#[test]
fn test_extract_subject_rejects_garbage() {
    let (_, service) = create_test_service();

    let err = service.extract_subject("not-a-jwt").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::MalformedToken)
    ));
}

#[test]
fn test_extract_subject_rejects_foreign_signature() {
    let (_, service) = create_test_service();
    let other = TokenService::new(
        Arc::new(TokenStore::new()),
        TokenServiceConfig {
            secret: "a-different-secret".to_string(),
            ..TokenServiceConfig::default()
        },
    );

    let foreign = other.issue_token(SUBJECT).unwrap();
    let err = service.extract_subject(&foreign).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::MalformedToken)
    ));
}

#[test]
fn test_is_expired() {
    let (_, service) = create_test_service();

    let fresh = service.issue_token(SUBJECT).unwrap();
    assert!(!service.is_expired(&fresh).unwrap());

    let expired = service.issue_token_with_ttl(SUBJECT, -60).unwrap();
    assert!(service.is_expired(&expired).unwrap());

    assert!(service.is_expired("garbage").is_err());
}

#[test]
fn test_validate_matches_subject_and_expiry() {
    let (_, service) = create_test_service();

    let token = service.issue_token(SUBJECT).unwrap();
    assert!(service.validate(&token, SUBJECT).unwrap());
    assert!(!service.validate(&token, "bob@example.com").unwrap());

    let expired = service.issue_token_with_ttl(SUBJECT, -60).unwrap();
    assert!(!service.validate(&expired, SUBJECT).unwrap());
}

#[test]
fn test_invalidate_removes_active_token() {
    let (store, service) = create_test_service();

    let token = service.issue_token(SUBJECT).unwrap();
    service.invalidate(&token).unwrap();

    assert_eq!(store.get(SUBJECT), None);
}

#[test]
fn test_invalidate_is_single_use() {
    let (_, service) = create_test_service();

    let token = service.issue_token(SUBJECT).unwrap();
    service.invalidate(&token).unwrap();

    let err = service.invalidate(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::NotLoggedIn { .. })
    ));
}

#[test]
fn test_invalidate_fails_for_expired_session() {
    let (_, service) = create_test_service();

    let expired = service.issue_token_with_ttl(SUBJECT, -60).unwrap();
    let err = service.invalidate(&expired).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::NotLoggedIn { .. })
    ));
}

#[test]
fn test_invalidate_rejects_malformed_token() {
    let (_, service) = create_test_service();

    let err = service.invalidate("not-a-jwt").unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidToken)));
}

#[test]
fn test_store_holds_at_most_one_token_per_subject() {
    let (store, service) = create_test_service();

    let token = service.issue_token(SUBJECT).unwrap();
    service.issue_token(SUBJECT).unwrap();
    service.invalidate(&token).unwrap();
    service.issue_token(SUBJECT).unwrap();

    assert_eq!(store.len(), 1);
}

#[test]
fn test_concurrent_issuance_yields_a_single_token() {
    let (store, service) = create_test_service();
    let service = Arc::new(service);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            thread::spawn(move || service.issue_token(SUBJECT).unwrap())
        })
        .collect();

    let tokens: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(tokens.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(store.len(), 1);
}
