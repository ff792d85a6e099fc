//! Password hashing helpers built on bcrypt.

use crate::errors::DomainError;

/// Hash a plain-text password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {e}"),
    })
}

/// Verify a plain-text password against its stored hash.
///
/// A malformed stored hash counts as a failed verification rather than an
/// error; the caller cannot do anything different with either outcome.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
