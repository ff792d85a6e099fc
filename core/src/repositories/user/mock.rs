//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use tf_shared::types::Pagination;

use crate::domain::entities::user::{User, UserProfile};
use crate::errors::{AuthError, DomainError};

use super::trait_::{UserListFilter, UserRepository};

/// Mock user repository backed by in-memory maps
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository seeded with a user
    pub async fn with_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.write().await.insert(user.id, user);
        repo
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(
        &self,
        filter: &UserListFilter,
        pagination: &Pagination,
    ) -> Result<Vec<(User, Option<UserProfile>)>, DomainError> {
        let users = self.users.read().await;
        let profiles = self.profiles.read().await;

        let mut matched: Vec<(User, Option<UserProfile>)> = users
            .values()
            .filter(|u| filter.role.map_or(true, |role| u.role == role))
            .filter(|u| {
                filter.search.as_deref().map_or(true, |term| {
                    let term = term.to_lowercase();
                    let profile = profiles.get(&u.id);
                    u.email.to_lowercase().contains(&term)
                        || profile.map_or(false, |p| {
                            p.first_name.to_lowercase().contains(&term)
                                || p.last_name.to_lowercase().contains(&term)
                        })
                })
            })
            .map(|u| (u.clone(), profiles.get(&u.id).cloned()))
            .collect();

        matched.sort_by_key(|(u, _)| u.created_at);

        Ok(matched
            .into_iter()
            .skip(pagination.skip as usize)
            .take(pagination.limit as usize)
            .collect())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, DomainError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}
