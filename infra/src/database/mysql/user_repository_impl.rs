//! MySQL implementation of the UserRepository trait.
//!
//! Accounts live in `users`, display profiles in `user_profiles`, joined on
//! demand. Relationships stay explicit foreign-key lookups; rows are mapped
//! into plain entities.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tf_core::domain::entities::user::{User, UserProfile, UserRole};
use tf_core::errors::DomainError;
use tf_core::repositories::user::r#trait::{UserListFilter, UserRepository};
use tf_shared::types::Pagination;

/// Wrap a SQLx failure into the domain's database error
pub(crate) fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::Database {
        message: format!("{context}: {e}"),
    }
}

/// Parse a CHAR(36) column into a Uuid
pub(crate) fn parse_uuid(raw: &str, column: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| db_error(&format!("Invalid UUID in {column}"), e))
}

const USER_COLUMNS: &str = "id, email, password_hash, role, is_active, created_at, updated_at";

const PROFILE_COLUMNS: &str =
    "user_id, first_name, last_name, phone, address, bio, avatar_url, created_at, updated_at";

/// Map a row carrying the unaliased `users` columns
pub(crate) fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
    let id: String = row.try_get("id").map_err(|e| db_error("Failed to get id", e))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| db_error("Failed to get role", e))?;

    Ok(User {
        id: parse_uuid(&id, "users.id")?,
        email: row
            .try_get("email")
            .map_err(|e| db_error("Failed to get email", e))?,
        password_hash: row
            .try_get("password_hash")
            .map_err(|e| db_error("Failed to get password_hash", e))?,
        role: UserRole::parse(&role).ok_or_else(|| db_error("Unknown role", &role))?,
        is_active: row
            .try_get("is_active")
            .map_err(|e| db_error("Failed to get is_active", e))?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| db_error("Failed to get created_at", e))?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(|e| db_error("Failed to get updated_at", e))?,
    })
}

/// Map a row selected straight from `user_profiles`
pub(crate) fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<UserProfile, DomainError> {
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| db_error("Failed to get user_id", e))?;

    Ok(UserProfile {
        user_id: parse_uuid(&user_id, "user_profiles.user_id")?,
        first_name: row
            .try_get("first_name")
            .map_err(|e| db_error("Failed to get first_name", e))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| db_error("Failed to get last_name", e))?,
        phone: row
            .try_get("phone")
            .map_err(|e| db_error("Failed to get phone", e))?,
        address: row
            .try_get("address")
            .map_err(|e| db_error("Failed to get address", e))?,
        bio: row
            .try_get("bio")
            .map_err(|e| db_error("Failed to get bio", e))?,
        avatar_url: row
            .try_get("avatar_url")
            .map_err(|e| db_error("Failed to get avatar_url", e))?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| db_error("Failed to get created_at", e))?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(|e| db_error("Failed to get updated_at", e))?,
    })
}

/// Map profile columns from a join where `user_id`, `created_at` and
/// `updated_at` are aliased with a `p_` prefix to avoid collisions. Returns
/// `None` when the LEFT JOIN produced no profile row.
pub(crate) fn row_to_joined_profile(
    row: &sqlx::mysql::MySqlRow,
) -> Result<Option<UserProfile>, DomainError> {
    let user_id: Option<String> = row
        .try_get("p_user_id")
        .map_err(|e| db_error("Failed to get p_user_id", e))?;
    let raw = match user_id {
        Some(raw) => raw,
        None => return Ok(None),
    };

    Ok(Some(UserProfile {
        user_id: parse_uuid(&raw, "user_profiles.user_id")?,
        first_name: row
            .try_get("first_name")
            .map_err(|e| db_error("Failed to get first_name", e))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| db_error("Failed to get last_name", e))?,
        phone: row
            .try_get("phone")
            .map_err(|e| db_error("Failed to get phone", e))?,
        address: row
            .try_get("address")
            .map_err(|e| db_error("Failed to get address", e))?,
        bio: row
            .try_get("bio")
            .map_err(|e| db_error("Failed to get bio", e))?,
        avatar_url: row
            .try_get("avatar_url")
            .map_err(|e| db_error("Failed to get avatar_url", e))?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("p_created_at")
            .map_err(|e| db_error("Failed to get p_created_at", e))?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("p_updated_at")
            .map_err(|e| db_error("Failed to get p_updated_at", e))?,
    }))
}

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user by id", e))?;

        match result {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find user by email", e))?;

        match result {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS found")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check email existence", e))?;

        let found: i8 = row
            .try_get("found")
            .map_err(|e| db_error("Failed to get existence result", e))?;
        Ok(found == 1)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, email, password_hash, role, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create user", e))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, password_hash = ?, role = ?, is_active = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }

    async fn list(
        &self,
        filter: &UserListFilter,
        pagination: &Pagination,
    ) -> Result<Vec<(User, Option<UserProfile>)>, DomainError> {
        let mut query = String::from(
            "SELECT u.id, u.email, u.password_hash, u.role, u.is_active, \
             u.created_at, u.updated_at, \
             p.user_id AS p_user_id, p.first_name, p.last_name, p.phone, p.address, \
             p.bio, p.avatar_url, p.created_at AS p_created_at, p.updated_at AS p_updated_at \
             FROM users u \
             LEFT JOIN user_profiles p ON p.user_id = u.id \
             WHERE 1 = 1",
        );
        if filter.role.is_some() {
            query.push_str(" AND u.role = ?");
        }
        if filter.search.is_some() {
            query.push_str(" AND (u.email LIKE ? OR p.first_name LIKE ? OR p.last_name LIKE ?)");
        }
        query.push_str(" ORDER BY u.created_at ASC LIMIT ? OFFSET ?");

        let mut q = sqlx::query(&query);
        if let Some(role) = filter.role {
            q = q.bind(role.as_str());
        }
        if let Some(search) = &filter.search {
            let like = format!("%{search}%");
            q = q.bind(like.clone()).bind(like.clone()).bind(like);
        }
        q = q.bind(pagination.limit_i64()).bind(pagination.offset_i64());

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list users", e))?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push((row_to_user(&row)?, row_to_joined_profile(&row)?));
        }

        Ok(users)
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find profile", e))?;

        match result {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, DomainError> {
        let query = r#"
            INSERT INTO user_profiles (
                user_id, first_name, last_name, phone, address, bio, avatar_url,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                first_name = VALUES(first_name),
                last_name = VALUES(last_name),
                phone = VALUES(phone),
                address = VALUES(address),
                bio = VALUES(bio),
                avatar_url = VALUES(avatar_url),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(profile.user_id.to_string())
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.phone)
            .bind(&profile.address)
            .bind(&profile.bio)
            .bind(&profile.avatar_url)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to upsert profile", e))?;

        Ok(profile)
    }
}
