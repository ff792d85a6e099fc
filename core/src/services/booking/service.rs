//! Main booking service implementation

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::user::Principal;
use crate::domain::value_objects::AvailabilityCheck;
use crate::errors::{BookingError, DomainError, DomainResult};
use crate::repositories::booking::r#trait::{BookingListFilter, BookingRepository};
use crate::repositories::tutor::r#trait::TutorRepository;

use super::slots::{self, ALLOWED_DURATIONS_MINUTES};

/// Calendar date format accepted by the slot query
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bookings may be cancelled no later than this long before the session
const CANCELLATION_WINDOW_HOURS: i64 = 24;

/// Data required to create a booking
#[derive(Debug, Clone)]
pub struct CreateBookingData {
    pub tutor_id: Uuid,
    pub subject: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: Option<String>,
}

/// Fields a booking update may change
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingData {
    pub notes: Option<String>,
    pub status: Option<BookingStatus>,
}

/// Booking service for conflict checks, slot resolution and the booking
/// lifecycle.
///
/// The conflict check here is a read-then-decide with no atomicity
/// guarantee; the store-level `create_if_free` is the serialization point
/// that closes the window between check and insert.
pub struct BookingService<B, T>
where
    B: BookingRepository,
    T: TutorRepository,
{
    /// Booking repository for reservation persistence
    booking_repository: Arc<B>,
    /// Tutor repository for schedule lookups
    tutor_repository: Arc<T>,
}

impl<B, T> BookingService<B, T>
where
    B: BookingRepository,
    T: TutorRepository,
{
    /// Create a new booking service
    pub fn new(booking_repository: Arc<B>, tutor_repository: Arc<T>) -> Self {
        Self {
            booking_repository,
            tutor_repository,
        }
    }

    /// Whether any active booking for the tutor overlaps `[start, end)`.
    ///
    /// No buffer is applied; `start < end` is the caller's responsibility.
    pub async fn has_conflict(
        &self,
        tutor_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<bool> {
        let conflicts = self
            .booking_repository
            .find_overlapping(tutor_id, start, end)
            .await?;
        Ok(!conflicts.is_empty())
    }

    /// Zero-buffer availability probe for a proposed interval, returning
    /// the conflicting bookings alongside the verdict.
    pub async fn check_availability(
        &self,
        tutor_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<AvailabilityCheck> {
        if start >= end {
            return Err(DomainError::Booking(BookingError::StartNotBeforeEnd));
        }

        let conflicts = self
            .booking_repository
            .find_overlapping(tutor_id, start, end)
            .await?;
        Ok(AvailabilityCheck::new(tutor_id, start, end, conflicts))
    }

    /// Resolve the valid session start times for a tutor on a date.
    ///
    /// Existing active bookings block their interval plus a 15-minute
    /// trailing buffer. A tutor without a usable schedule for the date's
    /// weekday yields an empty list, never an error; so does a schedule
    /// blob that no longer parses.
    ///
    /// # Errors
    /// * `BookingError::InvalidDuration` unless the duration is 30 or 60
    /// * `BookingError::InvalidDate` for an unparseable date
    /// * `DomainError::NotFound` for an unknown tutor
    pub async fn available_slots(
        &self,
        tutor_id: Uuid,
        date: &str,
        duration_minutes: i64,
    ) -> DomainResult<Vec<String>> {
        if !ALLOWED_DURATIONS_MINUTES.contains(&duration_minutes) {
            return Err(DomainError::Booking(BookingError::InvalidDuration));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| DomainError::Booking(BookingError::InvalidDate))?;

        let tutor = self
            .tutor_repository
            .find_by_user_id(tutor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Tutor"))?;

        // Missing and corrupt schedules read the same: no availability
        let schedule = match tutor.schedule() {
            Some(schedule) => schedule,
            None => return Ok(Vec::new()),
        };

        let weekday = date.format("%A").to_string().to_lowercase();
        let blocks = schedule.blocks_for(&weekday);
        if blocks.is_empty() {
            return Ok(Vec::new());
        }

        let day_start = date.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1) - Duration::seconds(1);
        let bookings = self
            .booking_repository
            .find_overlapping(tutor_id, day_start, day_end)
            .await?;

        let blocked = slots::blocked_intervals(&bookings);
        Ok(slots::enumerate_slots(
            date,
            blocks,
            &blocked,
            Duration::minutes(duration_minutes),
        ))
    }

    /// Create a pending booking for a student.
    ///
    /// The conflict check uses zero buffer, so back-to-back sessions can be
    /// booked through this path even though the slot resolver would not
    /// offer them. The final word on the interval belongs to the store's
    /// atomic insert.
    pub async fn create_booking(
        &self,
        student_id: Uuid,
        data: CreateBookingData,
    ) -> DomainResult<Booking> {
        if data.start_time >= data.end_time {
            return Err(DomainError::Booking(BookingError::StartNotBeforeEnd));
        }
        if data.start_time < Utc::now().naive_utc() {
            return Err(DomainError::Booking(BookingError::StartInPast));
        }

        self.tutor_repository
            .find_by_user_id(data.tutor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Tutor"))?;

        if self
            .has_conflict(data.tutor_id, data.start_time, data.end_time)
            .await?
        {
            return Err(DomainError::Booking(BookingError::TimeConflict));
        }

        let booking = Booking::new(
            student_id,
            data.tutor_id,
            data.subject,
            data.start_time,
            data.end_time,
            data.notes,
        );

        let booking = self.booking_repository.create_if_free(booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            tutor_id = %booking.tutor_id,
            "booking created"
        );

        Ok(booking)
    }

    /// List bookings visible to the principal.
    ///
    /// Students and parents see bookings they made, tutors see bookings on
    /// their calendar, admins see whatever the filter selects.
    pub async fn list_bookings(
        &self,
        principal: Principal,
        mut filter: BookingListFilter,
    ) -> DomainResult<Vec<Booking>> {
        if !principal.is_admin() {
            if principal.is_tutor() {
                filter.tutor_id = Some(principal.user_id);
                filter.student_id = None;
            } else {
                filter.student_id = Some(principal.user_id);
                filter.tutor_id = None;
            }
        }

        self.booking_repository.list(&filter).await
    }

    /// Fetch a single booking, visible only to its parties and admins
    pub async fn get_booking(&self, principal: Principal, id: Uuid) -> DomainResult<Booking> {
        let booking = self
            .booking_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        if !Self::is_party(principal, &booking) {
            return Err(DomainError::Forbidden);
        }

        Ok(booking)
    }

    /// Update a booking's notes and/or status.
    ///
    /// Any party may edit notes; status transitions are reserved for the
    /// booking's tutor and admins.
    pub async fn update_booking(
        &self,
        principal: Principal,
        id: Uuid,
        data: UpdateBookingData,
    ) -> DomainResult<Booking> {
        let mut booking = self.get_booking(principal, id).await?;

        if let Some(status) = data.status {
            let may_change_status =
                principal.is_admin() || (principal.is_tutor() && booking.tutor_id == principal.user_id);
            if !may_change_status {
                return Err(DomainError::Booking(BookingError::StatusChangeForbidden));
            }
            booking.set_status(status);
        }

        if let Some(notes) = data.notes {
            booking.set_notes(Some(notes));
        }

        self.booking_repository.update(booking).await
    }

    /// Cancel a booking.
    ///
    /// Only pending or confirmed bookings can be cancelled. Parties to the
    /// booking must do so at least 24 hours before the session; admins are
    /// not bound by the window.
    pub async fn cancel_booking(&self, principal: Principal, id: Uuid) -> DomainResult<Booking> {
        let mut booking = self.get_booking(principal, id).await?;

        if !booking.status.is_active() {
            return Err(DomainError::Booking(BookingError::NotCancellable));
        }

        if !principal.is_admin() {
            let deadline = booking.start_time - Duration::hours(CANCELLATION_WINDOW_HOURS);
            if Utc::now().naive_utc() > deadline {
                return Err(DomainError::Booking(BookingError::CancellationWindowClosed));
            }
        }

        booking.set_status(BookingStatus::Cancelled);
        let booking = self.booking_repository.update(booking).await?;

        tracing::info!(booking_id = %booking.id, "booking cancelled");

        Ok(booking)
    }

    fn is_party(principal: Principal, booking: &Booking) -> bool {
        principal.is_admin()
            || booking.student_id == principal.user_id
            || booking.tutor_id == principal.user_id
    }
}
