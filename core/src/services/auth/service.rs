//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use tf_shared::utils::validation;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserProfile, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Data required to register a new user
#[derive(Debug, Clone)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// A user together with their profile and issued tokens
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub profile: Option<UserProfile>,
    pub tokens: TokenPair,
}

/// Authentication service for registration, login and token refresh
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new user with a profile.
    ///
    /// # Errors
    /// * Validation error for a malformed email or short password
    /// * `AuthError::EmailAlreadyRegistered` if the email is taken
    pub async fn register(&self, data: RegisterData) -> DomainResult<(User, UserProfile)> {
        if !validation::is_valid_email(&data.email) {
            return Err(DomainError::validation("Invalid email address"));
        }
        if !validation::is_valid_password(&data.password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters",
                validation::MIN_PASSWORD_LENGTH
            )));
        }
        if data.first_name.trim().is_empty() || data.last_name.trim().is_empty() {
            return Err(DomainError::validation("First and last name are required"));
        }

        if self.user_repository.exists_by_email(&data.email).await? {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        let password_hash = hash_password(&data.password, self.config.bcrypt_cost)?;
        let user = self
            .user_repository
            .create(User::new(data.email, password_hash, data.role))
            .await?;

        let profile = self
            .user_repository
            .upsert_profile(UserProfile::new(user.id, data.first_name, data.last_name))
            .await?;

        tracing::info!(user_id = %user.id, role = user.role.as_str(), "registered new user");

        Ok((user, profile))
    }

    /// Authenticate with email and password, issuing a token pair.
    ///
    /// The same error is returned for an unknown email and a wrong
    /// password, so the endpoint does not leak which emails exist.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthenticatedUser> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if !verify_password(password, &user.password_hash) {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }
        if !user.is_active {
            return Err(DomainError::Auth(AuthError::InactiveUser));
        }

        let tokens = self.token_service.generate_tokens(user.id, user.role)?;
        let profile = self.user_repository.find_profile(user.id).await?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(AuthenticatedUser {
            user,
            profile,
            tokens,
        })
    }

    /// Exchange a valid refresh token for a new access token.
    ///
    /// The user is re-read so the fresh access token carries the current
    /// role and an account deactivated since login is locked out.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;
        let user_id = claims.user_id()?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if !user.is_active {
            return Err(DomainError::Auth(AuthError::InactiveUser));
        }

        self.token_service.generate_access_token(user.id, user.role)
    }

    /// Look up the authenticated principal with their profile
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<(User, Option<UserProfile>)> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let profile = self.user_repository.find_profile(user.id).await?;
        Ok((user, profile))
    }
}
