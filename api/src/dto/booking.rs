use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tf_core::domain::entities::{Booking, BookingStatus};
use tf_core::domain::value_objects::AvailabilityCheck;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub tutor_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub subject: String,

    pub start_time: NaiveDateTime,

    pub end_time: NaiveDateTime,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    pub status: Option<BookingStatus>,
}

/// Zero-buffer availability probe for a proposed interval
#[derive(Debug, Clone, Deserialize)]
pub struct CheckAvailabilityRequest {
    pub tutor_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Query parameters for the slot resolver
#[derive(Debug, Clone, Deserialize)]
pub struct SlotQuery {
    pub tutor_id: Uuid,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Session length in minutes; 30 or 60
    pub duration: i64,
}

/// Query parameters for booking listings; non-admin callers have their
/// party filter forced server-side
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListQuery {
    pub student_id: Option<Uuid>,
    pub tutor_id: Option<Uuid>,
    pub status: Option<BookingStatus>,
    pub start_from: Option<NaiveDateTime>,
    pub end_until: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub tutor_id: Uuid,
    pub subject: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            student_id: booking.student_id,
            tutor_id: booking.tutor_id,
            subject: booking.subject,
            start_time: booking.start_time,
            end_time: booking.end_time,
            notes: booking.notes,
            status: booking.status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub tutor_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub is_available: bool,
    pub conflicting_bookings: Vec<BookingResponse>,
}

impl From<AvailabilityCheck> for AvailabilityResponse {
    fn from(check: AvailabilityCheck) -> Self {
        Self {
            tutor_id: check.tutor_id,
            start_time: check.start_time,
            end_time: check.end_time,
            is_available: check.is_available,
            conflicting_bookings: check
                .conflicting_bookings
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Valid session start times for a tutor on a date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub tutor_id: Uuid,
    pub date: String,
    pub duration_minutes: i64,
    /// `"HH:MM"` start times, in schedule-block order
    pub slots: Vec<String>,
}
