//! MySQL implementation of the BookingRepository trait.
//!
//! `create_if_free` is the store-level serialization point for booking
//! creation: the overlap re-check runs with `FOR UPDATE` inside a
//! transaction, so two concurrent creations for overlapping intervals
//! cannot both commit. The bare `create` carries no such guarantee.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tf_core::domain::entities::booking::{Booking, BookingStatus};
use tf_core::errors::{BookingError, DomainError};
use tf_core::repositories::booking::r#trait::{BookingListFilter, BookingRepository};

use super::user_repository_impl::{db_error, parse_uuid};

const BOOKING_COLUMNS: &str = "id, student_id, tutor_id, subject, start_time, end_time, \
     notes, status, created_at, updated_at";

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let id: String = row.try_get("id").map_err(|e| db_error("Failed to get id", e))?;
        let student_id: String = row
            .try_get("student_id")
            .map_err(|e| db_error("Failed to get student_id", e))?;
        let tutor_id: String = row
            .try_get("tutor_id")
            .map_err(|e| db_error("Failed to get tutor_id", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| db_error("Failed to get status", e))?;

        Ok(Booking {
            id: parse_uuid(&id, "bookings.id")?,
            student_id: parse_uuid(&student_id, "bookings.student_id")?,
            tutor_id: parse_uuid(&tutor_id, "bookings.tutor_id")?,
            subject: row
                .try_get("subject")
                .map_err(|e| db_error("Failed to get subject", e))?,
            start_time: row
                .try_get::<NaiveDateTime, _>("start_time")
                .map_err(|e| db_error("Failed to get start_time", e))?,
            end_time: row
                .try_get::<NaiveDateTime, _>("end_time")
                .map_err(|e| db_error("Failed to get end_time", e))?,
            notes: row
                .try_get("notes")
                .map_err(|e| db_error("Failed to get notes", e))?,
            status: BookingStatus::parse(&status)
                .ok_or_else(|| db_error("Unknown booking status", &status))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }

    fn bind_insert<'q>(
        query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
        booking: &'q Booking,
    ) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
        query
            .bind(booking.id.to_string())
            .bind(booking.student_id.to_string())
            .bind(booking.tutor_id.to_string())
            .bind(&booking.subject)
            .bind(booking.start_time)
            .bind(booking.end_time)
            .bind(&booking.notes)
            .bind(booking.status.as_str())
            .bind(booking.created_at)
            .bind(booking.updated_at)
    }
}

const INSERT_BOOKING: &str = r#"
    INSERT INTO bookings (
        id, student_id, tutor_id, subject, start_time, end_time,
        notes, status, created_at, updated_at
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const OVERLAP_WHERE: &str = "tutor_id = ? \
     AND status IN ('pending', 'confirmed') \
     AND start_time < ? AND end_time > ?";

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find booking", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        Self::bind_insert(sqlx::query(INSERT_BOOKING), &booking)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create booking", e))?;

        Ok(booking)
    }

    async fn create_if_free(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // Lock overlapping rows so a concurrent creation serializes behind us
        let query = format!("SELECT COUNT(*) AS conflicts FROM bookings WHERE {OVERLAP_WHERE} FOR UPDATE");
        let row = sqlx::query(&query)
            .bind(booking.tutor_id.to_string())
            .bind(booking.end_time)
            .bind(booking.start_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to re-check conflicts", e))?;

        let conflicts: i64 = row
            .try_get("conflicts")
            .map_err(|e| db_error("Failed to get conflict count", e))?;
        if conflicts > 0 {
            // Dropping the transaction rolls it back
            return Err(DomainError::Booking(BookingError::TimeConflict));
        }

        Self::bind_insert(sqlx::query(INSERT_BOOKING), &booking)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to create booking", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit booking", e))?;

        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            UPDATE bookings
            SET subject = ?, start_time = ?, end_time = ?, notes = ?, status = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&booking.subject)
            .bind(booking.start_time)
            .bind(booking.end_time)
            .bind(&booking.notes)
            .bind(booking.status.as_str())
            .bind(booking.updated_at)
            .bind(booking.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update booking", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }

        Ok(booking)
    }

    async fn find_overlapping(
        &self,
        tutor_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE {OVERLAP_WHERE} ORDER BY start_time ASC"
        );

        let rows = sqlx::query(&query)
            .bind(tutor_id.to_string())
            .bind(end)
            .bind(start)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find overlapping bookings", e))?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in rows {
            bookings.push(Self::row_to_booking(&row)?);
        }
        Ok(bookings)
    }

    async fn list(&self, filter: &BookingListFilter) -> Result<Vec<Booking>, DomainError> {
        let mut query = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE 1 = 1");
        if filter.student_id.is_some() {
            query.push_str(" AND student_id = ?");
        }
        if filter.tutor_id.is_some() {
            query.push_str(" AND tutor_id = ?");
        }
        if filter.status.is_some() {
            query.push_str(" AND status = ?");
        }
        if filter.start_from.is_some() {
            query.push_str(" AND start_time >= ?");
        }
        if filter.end_until.is_some() {
            query.push_str(" AND end_time <= ?");
        }
        query.push_str(" ORDER BY start_time DESC");

        let mut q = sqlx::query(&query);
        if let Some(student_id) = filter.student_id {
            q = q.bind(student_id.to_string());
        }
        if let Some(tutor_id) = filter.tutor_id {
            q = q.bind(tutor_id.to_string());
        }
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        if let Some(start_from) = filter.start_from {
            q = q.bind(start_from);
        }
        if let Some(end_until) = filter.end_until {
            q = q.bind(end_until);
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list bookings", e))?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in rows {
            bookings.push(Self::row_to_booking(&row)?);
        }
        Ok(bookings)
    }
}
