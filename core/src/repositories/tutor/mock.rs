//! Mock implementation of TutorRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use tf_shared::types::Pagination;

use crate::domain::entities::tutor::TutorProfile;
use crate::domain::entities::user::{User, UserProfile};
use crate::errors::DomainError;

use super::trait_::{TutorListFilter, TutorListing, TutorRepository};

/// Mock tutor repository backed by in-memory maps.
///
/// Listing rows join against locally held account data, so tests seed the
/// full triple through [`MockTutorRepository::seed`].
#[derive(Clone)]
pub struct MockTutorRepository {
    tutors: Arc<RwLock<HashMap<Uuid, TutorProfile>>>,
    accounts: Arc<RwLock<HashMap<Uuid, (User, UserProfile)>>>,
}

impl MockTutorRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tutors: Arc::new(RwLock::new(HashMap::new())),
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a complete tutor: account, display profile and tutor profile
    pub async fn seed(&self, user: User, profile: UserProfile, tutor: TutorProfile) {
        self.accounts
            .write()
            .await
            .insert(user.id, (user, profile));
        self.tutors.write().await.insert(tutor.user_id, tutor);
    }
}

impl Default for MockTutorRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter(listing: &TutorListing, filter: &TutorListFilter) -> bool {
    if filter.verified_only && !listing.tutor.is_verified {
        return false;
    }
    if let Some(min) = filter.min_rate {
        if listing.tutor.hourly_rate < min {
            return false;
        }
    }
    if let Some(max) = filter.max_rate {
        if listing.tutor.hourly_rate > max {
            return false;
        }
    }
    if let Some(ref subject) = filter.subject {
        let subject = subject.to_lowercase();
        if !listing
            .tutor
            .subjects
            .iter()
            .any(|s| s.to_lowercase().contains(&subject))
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl TutorRepository for MockTutorRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<TutorProfile>, DomainError> {
        let tutors = self.tutors.read().await;
        Ok(tutors.get(&user_id).cloned())
    }

    async fn upsert(&self, profile: TutorProfile) -> Result<TutorProfile, DomainError> {
        let mut tutors = self.tutors.write().await;
        tutors.insert(profile.user_id, profile.clone());
        Ok(profile)
    }

    async fn list(
        &self,
        filter: &TutorListFilter,
        pagination: &Pagination,
    ) -> Result<Vec<TutorListing>, DomainError> {
        let tutors = self.tutors.read().await;
        let accounts = self.accounts.read().await;

        let mut listings: Vec<TutorListing> = tutors
            .values()
            .filter_map(|tutor| {
                let (user, profile) = accounts.get(&tutor.user_id)?;
                if !user.is_active {
                    return None;
                }
                Some(TutorListing {
                    tutor: tutor.clone(),
                    user: user.clone(),
                    profile: profile.clone(),
                })
            })
            .filter(|listing| matches_filter(listing, filter))
            .collect();

        listings.sort_by_key(|l| l.tutor.created_at);

        Ok(listings
            .into_iter()
            .skip(pagination.skip as usize)
            .take(pagination.limit as usize)
            .collect())
    }

    async fn find_listing(&self, user_id: Uuid) -> Result<Option<TutorListing>, DomainError> {
        let tutors = self.tutors.read().await;
        let accounts = self.accounts.read().await;

        Ok(tutors.get(&user_id).and_then(|tutor| {
            let (user, profile) = accounts.get(&user_id)?;
            if !user.is_active {
                return None;
            }
            Some(TutorListing {
                tutor: tutor.clone(),
                user: user.clone(),
                profile: profile.clone(),
            })
        }))
    }
}
