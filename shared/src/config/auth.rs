//! Authentication and token configuration

use serde::{Deserialize, Serialize};

/// Authentication settings shared between the token service and middleware
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing JWT tokens (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_access_token_minutes")]
    pub access_token_expire_minutes: i64,

    /// Refresh token lifetime in days
    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_expire_days: i64,

    /// bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create a configuration with default expiry settings
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_expire_minutes: default_access_token_minutes(),
            refresh_token_expire_days: default_refresh_token_days(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_access_token_minutes() -> i64 {
    15
}

fn default_refresh_token_days() -> i64 {
    7
}

fn default_bcrypt_cost() -> u32 {
    12
}
