//! Authentication service configuration

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    /// Lower-cost configuration for tests, where hashing speed matters
    /// more than hash strength
    pub fn fast_for_tests() -> Self {
        Self { bcrypt_cost: 4 }
    }
}
