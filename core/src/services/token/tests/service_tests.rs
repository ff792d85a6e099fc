use uuid::Uuid;

use crate::domain::entities::token::TokenUse;
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::new("test-secret-at-least-32-bytes!!"))
}

#[test]
fn test_access_token_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service
        .generate_access_token(user_id, UserRole::Student)
        .unwrap();
    let claims = service.verify_access_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.user_role(), Some(UserRole::Student));
    assert_eq!(claims.token_use, TokenUse::Access);
}

#[test]
fn test_refresh_token_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.generate_refresh_token(user_id).unwrap();
    let claims = service.verify_refresh_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.token_use, TokenUse::Refresh);
}

#[test]
fn test_access_token_rejected_as_refresh() {
    let service = service();
    let token = service
        .generate_access_token(Uuid::new_v4(), UserRole::Tutor)
        .unwrap();

    let err = service.verify_refresh_token(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidRefreshToken)
    ));
}

#[test]
fn test_refresh_token_rejected_as_access() {
    let service = service();
    let token = service.generate_refresh_token(Uuid::new_v4()).unwrap();

    let err = service.verify_access_token(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidClaims)));
}

#[test]
fn test_wrong_secret_rejected() {
    let service = service();
    let other = TokenService::new(TokenServiceConfig::new("another-secret-entirely!!!!!!!"));

    let token = service
        .generate_access_token(Uuid::new_v4(), UserRole::Admin)
        .unwrap();

    let err = other.verify_access_token(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_token_pair_expiry_seconds() {
    let service = service();
    let pair = service
        .generate_tokens(Uuid::new_v4(), UserRole::Parent)
        .unwrap();

    assert_eq!(pair.expires_in, 15 * 60);
    assert_ne!(pair.access_token, pair.refresh_token);
}

#[test]
fn test_garbage_token_rejected() {
    let service = service();
    let err = service.verify_access_token("not.a.jwt").unwrap_err();
    assert!(matches!(err, DomainError::Token(_)));
}
