//! User repository trait defining the interface for user data persistence.
//!
//! Profiles are owned by users one-to-one and travel through the same
//! repository; relationships are explicit foreign-key lookups, never live
//! object graphs.

use async_trait::async_trait;
use uuid::Uuid;

use tf_shared::types::Pagination;

use crate::domain::entities::user::{User, UserProfile, UserRole};
use crate::errors::DomainError;

/// Filters for the admin user listing
#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    /// Restrict to a single role
    pub role: Option<UserRole>,

    /// Case-insensitive substring match on email or profile name
    pub search: Option<String>,
}

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// List users with their profiles, filtered and paginated.
    ///
    /// Used by the admin listing; ordering is by creation time.
    async fn list(
        &self,
        filter: &UserListFilter,
        pagination: &Pagination,
    ) -> Result<Vec<(User, Option<UserProfile>)>, DomainError>;

    /// Find the profile attached to a user
    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError>;

    /// Create or replace a user's profile
    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, DomainError>;
}
