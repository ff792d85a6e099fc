use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tf_core::domain::entities::{User, UserProfile, UserRole};

/// Public view of a user account. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone: profile.phone,
            address: profile.address,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
        }
    }
}

/// User account with its profile, as returned by `/auth/me` and the admin
/// listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub profile: Option<ProfileResponse>,
}

impl UserWithProfileResponse {
    pub fn new(user: User, profile: Option<UserProfile>) -> Self {
        Self {
            user: user.into(),
            profile: profile.map(Into::into),
        }
    }
}

/// Full profile replacement; absent optional fields clear their column
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    #[validate(length(max = 512))]
    pub avatar_url: Option<String>,
}

/// Query parameters for the admin user listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub role: Option<UserRole>,
    pub search: Option<String>,
    #[serde(default)]
    pub skip: u32,
    pub limit: Option<u32>,
}
