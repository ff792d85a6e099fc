use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tf_core::domain::entities::TutorProfile;
use tf_core::repositories::TutorListing;

use super::user::ProfileResponse;

/// Create or replace the caller's tutor profile.
///
/// `availability` is the weekly schedule wire form, a JSON object mapping
/// lowercase weekday names to `["HH:MM", "HH:MM"]` pairs. It is validated
/// on write even though read paths tolerate corrupt stored blobs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TutorProfileRequest {
    #[validate(length(min = 1, max = 20))]
    pub subjects: Vec<String>,

    #[validate(range(min = 0.01, max = 10000.0))]
    pub hourly_rate: f64,

    pub availability: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorResponse {
    pub user_id: Uuid,
    pub subjects: Vec<String>,
    pub hourly_rate: f64,
    /// Parsed schedule wire form; `null` when unset or corrupt
    pub availability: Option<serde_json::Value>,
    pub is_verified: bool,
    pub rating: Option<f64>,
    pub total_sessions: i64,
}

impl From<TutorProfile> for TutorResponse {
    fn from(tutor: TutorProfile) -> Self {
        let availability = tutor
            .availability_schedule
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok());
        Self {
            user_id: tutor.user_id,
            subjects: tutor.subjects,
            hourly_rate: tutor.hourly_rate,
            availability,
            is_verified: tutor.is_verified,
            rating: tutor.rating,
            total_sessions: tutor.total_sessions,
        }
    }
}

/// One row of the public tutor directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorListingResponse {
    pub user_id: Uuid,
    pub email: String,
    pub profile: ProfileResponse,
    pub subjects: Vec<String>,
    pub hourly_rate: f64,
    pub is_verified: bool,
    pub rating: Option<f64>,
    pub total_sessions: i64,
}

impl From<TutorListing> for TutorListingResponse {
    fn from(listing: TutorListing) -> Self {
        Self {
            user_id: listing.tutor.user_id,
            email: listing.user.email,
            profile: listing.profile.into(),
            subjects: listing.tutor.subjects,
            hourly_rate: listing.tutor.hourly_rate,
            is_verified: listing.tutor.is_verified,
            rating: listing.tutor.rating,
            total_sessions: listing.tutor.total_sessions,
        }
    }
}

/// Query parameters for the public tutor directory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TutorListQuery {
    pub subject: Option<String>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    /// Defaults to true: unverified tutors are hidden unless asked for
    pub verified_only: Option<bool>,
    #[serde(default)]
    pub skip: u32,
    pub limit: Option<u32>,
}
