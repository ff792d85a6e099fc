//! Booking repository trait defining the interface for booking persistence.
//!
//! The store is the sole serialization point for booking creation: the
//! service-level conflict check is a read-then-decide with no atomicity
//! guarantee, so implementations of [`BookingRepository::create_if_free`]
//! must make the conflict re-check and insert atomic (a serializable
//! transaction or equivalent). The plain [`BookingRepository::create`]
//! gives no such guarantee.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::DomainError;

/// Filters for booking listings
#[derive(Debug, Clone, Default)]
pub struct BookingListFilter {
    /// Restrict to a student's bookings
    pub student_id: Option<Uuid>,

    /// Restrict to a tutor's bookings
    pub tutor_id: Option<Uuid>,

    /// Restrict to a single status
    pub status: Option<BookingStatus>,

    /// Bookings starting at or after this instant
    pub start_from: Option<NaiveDateTime>,

    /// Bookings ending at or before this instant
    pub end_until: Option<NaiveDateTime>,
}

/// Repository trait for Booking entity persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Insert a booking without any conflict guarantee
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Insert a booking only if no active booking overlaps it.
    ///
    /// The overlap re-check and the insert happen atomically at the store.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The created booking
    /// * `Err(DomainError::Booking(TimeConflict))` - An overlapping active
    ///   booking already holds the interval
    async fn create_if_free(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Update an existing booking
    async fn update(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// All active (pending or confirmed) bookings for a tutor whose
    /// interval overlaps `[start, end)` under the half-open overlap test.
    async fn find_overlapping(
        &self,
        tutor_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Booking>, DomainError>;

    /// List bookings matching a filter, newest start time first
    async fn list(&self, filter: &BookingListFilter) -> Result<Vec<Booking>, DomainError>;
}
