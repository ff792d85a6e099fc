//! MySQL implementation of the TutorRepository trait.
//!
//! Tutor profiles live in `tutor_profiles`, keyed by the owning user.
//! Subjects are stored as a JSON array in a text column; the availability
//! schedule stays an opaque blob the core parses on read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tf_core::domain::entities::tutor::TutorProfile;
use tf_core::errors::DomainError;
use tf_core::repositories::tutor::r#trait::{TutorListFilter, TutorListing, TutorRepository};
use tf_shared::types::Pagination;

use super::user_repository_impl::{db_error, parse_uuid, row_to_joined_profile, row_to_user};

const TUTOR_COLUMNS: &str = "user_id, subjects, hourly_rate, availability_schedule, \
     is_verified, rating, total_sessions, created_at, updated_at";

/// MySQL implementation of TutorRepository
pub struct MySqlTutorRepository {
    pool: MySqlPool,
}

impl MySqlTutorRepository {
    /// Create a new MySQL tutor repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_tutor(row: &sqlx::mysql::MySqlRow, prefix: &str) -> Result<TutorProfile, DomainError> {
        let col = |name: &str| format!("{prefix}{name}");

        let user_id: String = row
            .try_get(col("user_id").as_str())
            .map_err(|e| db_error("Failed to get user_id", e))?;
        let subjects_raw: String = row
            .try_get(col("subjects").as_str())
            .map_err(|e| db_error("Failed to get subjects", e))?;
        let subjects: Vec<String> = serde_json::from_str(&subjects_raw)
            .map_err(|e| db_error("Invalid subjects JSON", e))?;

        Ok(TutorProfile {
            user_id: parse_uuid(&user_id, "tutor_profiles.user_id")?,
            subjects,
            hourly_rate: row
                .try_get(col("hourly_rate").as_str())
                .map_err(|e| db_error("Failed to get hourly_rate", e))?,
            availability_schedule: row
                .try_get(col("availability_schedule").as_str())
                .map_err(|e| db_error("Failed to get availability_schedule", e))?,
            is_verified: row
                .try_get(col("is_verified").as_str())
                .map_err(|e| db_error("Failed to get is_verified", e))?,
            rating: row
                .try_get(col("rating").as_str())
                .map_err(|e| db_error("Failed to get rating", e))?,
            total_sessions: row
                .try_get(col("total_sessions").as_str())
                .map_err(|e| db_error("Failed to get total_sessions", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>(col("created_at").as_str())
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>(col("updated_at").as_str())
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }

    /// Joined select producing one listing row per tutor with an active
    /// account; the tutor columns are aliased with a `t_` prefix.
    fn listing_select() -> &'static str {
        "SELECT t.user_id AS t_user_id, t.subjects AS t_subjects, \
         t.hourly_rate AS t_hourly_rate, t.availability_schedule AS t_availability_schedule, \
         t.is_verified AS t_is_verified, t.rating AS t_rating, \
         t.total_sessions AS t_total_sessions, t.created_at AS t_created_at, \
         t.updated_at AS t_updated_at, \
         u.id, u.email, u.password_hash, u.role, u.is_active, u.created_at, u.updated_at, \
         p.user_id AS p_user_id, p.first_name, p.last_name, p.phone, p.address, \
         p.bio, p.avatar_url, p.created_at AS p_created_at, p.updated_at AS p_updated_at \
         FROM tutor_profiles t \
         INNER JOIN users u ON u.id = t.user_id AND u.is_active = TRUE \
         INNER JOIN user_profiles p ON p.user_id = t.user_id"
    }

    fn row_to_listing(row: &sqlx::mysql::MySqlRow) -> Result<TutorListing, DomainError> {
        let profile = row_to_joined_profile(row)?
            .ok_or_else(|| db_error("Tutor listing missing profile row", "inner join"))?;

        Ok(TutorListing {
            tutor: Self::row_to_tutor(row, "t_")?,
            user: row_to_user(row)?,
            profile,
        })
    }
}

#[async_trait]
impl TutorRepository for MySqlTutorRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<TutorProfile>, DomainError> {
        let query = format!("SELECT {TUTOR_COLUMNS} FROM tutor_profiles WHERE user_id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find tutor profile", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_tutor(&row, "")?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, profile: TutorProfile) -> Result<TutorProfile, DomainError> {
        let subjects = serde_json::to_string(&profile.subjects)
            .map_err(|e| db_error("Failed to serialize subjects", e))?;

        let query = r#"
            INSERT INTO tutor_profiles (
                user_id, subjects, hourly_rate, availability_schedule,
                is_verified, rating, total_sessions, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                subjects = VALUES(subjects),
                hourly_rate = VALUES(hourly_rate),
                availability_schedule = VALUES(availability_schedule),
                is_verified = VALUES(is_verified),
                rating = VALUES(rating),
                total_sessions = VALUES(total_sessions),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(profile.user_id.to_string())
            .bind(&subjects)
            .bind(profile.hourly_rate)
            .bind(&profile.availability_schedule)
            .bind(profile.is_verified)
            .bind(profile.rating)
            .bind(profile.total_sessions)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to upsert tutor profile", e))?;

        Ok(profile)
    }

    async fn list(
        &self,
        filter: &TutorListFilter,
        pagination: &Pagination,
    ) -> Result<Vec<TutorListing>, DomainError> {
        let mut query = format!("{} WHERE 1 = 1", Self::listing_select());
        if filter.verified_only {
            query.push_str(" AND t.is_verified = TRUE");
        }
        if filter.min_rate.is_some() {
            query.push_str(" AND t.hourly_rate >= ?");
        }
        if filter.max_rate.is_some() {
            query.push_str(" AND t.hourly_rate <= ?");
        }
        if filter.subject.is_some() {
            query.push_str(" AND LOWER(t.subjects) LIKE ?");
        }
        query.push_str(" ORDER BY t.created_at ASC LIMIT ? OFFSET ?");

        let mut q = sqlx::query(&query);
        if let Some(min) = filter.min_rate {
            q = q.bind(min);
        }
        if let Some(max) = filter.max_rate {
            q = q.bind(max);
        }
        if let Some(subject) = &filter.subject {
            q = q.bind(format!("%{}%", subject.to_lowercase()));
        }
        q = q.bind(pagination.limit_i64()).bind(pagination.offset_i64());

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list tutors", e))?;

        let mut listings = Vec::with_capacity(rows.len());
        for row in rows {
            listings.push(Self::row_to_listing(&row)?);
        }
        Ok(listings)
    }

    async fn find_listing(&self, user_id: Uuid) -> Result<Option<TutorListing>, DomainError> {
        let query = format!("{} WHERE t.user_id = ? LIMIT 1", Self::listing_select());

        let result = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find tutor listing", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_listing(&row)?)),
            None => Ok(None),
        }
    }
}
