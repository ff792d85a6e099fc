//! Tutor repository trait for tutor profile persistence and discovery.

use async_trait::async_trait;
use uuid::Uuid;

use tf_shared::types::Pagination;

use crate::domain::entities::tutor::TutorProfile;
use crate::domain::entities::user::{User, UserProfile};
use crate::errors::DomainError;

/// Filters for the public tutor listing
#[derive(Debug, Clone)]
pub struct TutorListFilter {
    /// Case-insensitive substring match against the subjects list
    pub subject: Option<String>,

    /// Minimum hourly rate
    pub min_rate: Option<f64>,

    /// Maximum hourly rate
    pub max_rate: Option<f64>,

    /// Restrict to verified tutors
    pub verified_only: bool,
}

impl Default for TutorListFilter {
    fn default() -> Self {
        Self {
            subject: None,
            min_rate: None,
            max_rate: None,
            verified_only: true,
        }
    }
}

/// One row of the public tutor listing: the tutor profile joined with the
/// account and display profile it belongs to.
#[derive(Debug, Clone)]
pub struct TutorListing {
    pub tutor: TutorProfile,
    pub user: User,
    pub profile: UserProfile,
}

/// Repository trait for TutorProfile persistence operations
#[async_trait]
pub trait TutorRepository: Send + Sync {
    /// Find a tutor profile by the owning user's ID
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<TutorProfile>, DomainError>;

    /// Create or replace a tutor profile
    async fn upsert(&self, profile: TutorProfile) -> Result<TutorProfile, DomainError>;

    /// List tutors with their account and display profile, filtered and
    /// paginated. Only active accounts appear.
    async fn list(
        &self,
        filter: &TutorListFilter,
        pagination: &Pagination,
    ) -> Result<Vec<TutorListing>, DomainError>;

    /// Full listing row for a single tutor, if the account is active
    async fn find_listing(&self, user_id: Uuid) -> Result<Option<TutorListing>, DomainError>;
}
