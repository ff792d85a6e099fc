//! Stateless JWT token service.
//!
//! Tokens are signed with HS256 and carry issuer/audience/nbf claims.
//! No token state is persisted: refresh tokens are plain JWTs with a
//! `token_use` claim, and logout is a client-side discard.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair, TokenUse, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates an access/refresh token pair for a user
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(DomainError)` - Token generation failed
    pub fn generate_tokens(&self, user_id: Uuid, role: UserRole) -> Result<TokenPair, DomainError> {
        let access_token = self.generate_access_token(user_id, role)?;
        let refresh_token = self.generate_refresh_token(user_id)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_minutes * 60,
        ))
    }

    /// Generates a new access token
    pub fn generate_access_token(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<String, DomainError> {
        let claims =
            Claims::new_access_token(user_id, role, self.config.access_token_expiry_minutes);
        self.encode(&claims)
    }

    /// Generates a new refresh token
    pub fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new_refresh_token(user_id, self.config.refresh_token_expiry_days);
        self.encode(&claims)
    }

    /// Verifies an access token and returns its claims
    ///
    /// Rejects refresh tokens presented as access tokens.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.verify(token)?;
        if claims.token_use != TokenUse::Access {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }
        Ok(claims)
    }

    /// Verifies a refresh token and returns its claims
    ///
    /// Rejects access tokens presented as refresh tokens.
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.verify(token)?;
        if claims.token_use != TokenUse::Refresh {
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }
        Ok(claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(error)
            })
    }
}
