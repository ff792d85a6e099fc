//! User entity representing a registered user in the TutorFlow system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A student booking tutoring sessions
    Student,
    /// A parent managing a student's account
    Parent,
    /// A tutor offering sessions
    Tutor,
    /// A platform administrator
    Admin,
}

impl UserRole {
    /// Stable string form used in the database and JWT claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Parent => "parent",
            UserRole::Tutor => "tutor",
            UserRole::Admin => "admin",
        }
    }

    /// Parse the database/claims string form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(UserRole::Student),
            "parent" => Some(UserRole::Parent),
            "tutor" => Some(UserRole::Tutor),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// User entity for authentication and basic account information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across the system
    pub email: String,

    /// bcrypt hash of the user's password
    pub password_hash: String,

    /// Role determining what the user may do
    pub role: UserRole,

    /// Whether the account is active; inactive users cannot authenticate
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user
    pub fn new(email: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivates the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is a tutor
    pub fn is_tutor(&self) -> bool {
        self.role == UserRole::Tutor
    }

    /// Checks if the user is an admin
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Authenticated principal derived from verified token claims.
///
/// Carries only what role-scoped operations need; handlers that need the
/// full account load it through the user repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Principal {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_tutor(&self) -> bool {
        self.role == UserRole::Tutor
    }
}

/// Extended profile information attached to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owning user
    pub user_id: Uuid,

    pub first_name: String,

    pub last_name: String,

    pub phone: Option<String>,

    pub address: Option<String>,

    pub bio: Option<String>,

    pub avatar_url: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a new profile with only the required name fields
    pub fn new(user_id: Uuid, first_name: String, last_name: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            first_name,
            last_name,
            phone: None,
            address: None,
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
