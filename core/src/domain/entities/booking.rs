//! Booking entity representing a reserved tutoring session.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a booking.
///
/// Only `Pending` and `Confirmed` bookings occupy time on a tutor's
/// calendar; the remaining statuses are kept for history and never block
/// availability or new bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl BookingStatus {
    /// Stable string form used in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::NoShow => "no_show",
        }
    }

    /// Parse the database string form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "completed" => Some(BookingStatus::Completed),
            "no_show" => Some(BookingStatus::NoShow),
            _ => None,
        }
    }

    /// Whether a booking in this status blocks the tutor's time
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// A reserved tutoring session between a student and a tutor.
///
/// Times are timezone-naive and share the wall clock of the tutor's weekly
/// schedule. Invariant: `start_time < end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,

    pub student_id: Uuid,

    pub tutor_id: Uuid,

    /// Subject being tutored, free-form label
    pub subject: String,

    pub start_time: NaiveDateTime,

    pub end_time: NaiveDateTime,

    pub notes: Option<String>,

    pub status: BookingStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new pending booking
    pub fn new(
        student_id: Uuid,
        tutor_id: Uuid,
        subject: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            student_id,
            tutor_id,
            subject,
            start_time,
            end_time,
            notes,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this booking currently blocks the tutor's time
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Half-open interval overlap test against `[start, end)`
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end_time && end > self.start_time
    }

    /// Transition to a new status
    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Replace the notes
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn booking(start: NaiveDateTime, end: NaiveDateTime) -> Booking {
        Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "math".to_string(),
            start,
            end,
            None,
        )
    }

    #[test]
    fn test_new_booking_is_pending() {
        let b = booking(at(9, 0), at(10, 0));
        assert_eq!(b.status, BookingStatus::Pending);
        assert!(b.is_active());
    }

    #[test]
    fn test_overlap_is_half_open() {
        let b = booking(at(9, 0), at(10, 0));

        // Strictly inside and straddling overlap
        assert!(b.overlaps(at(9, 15), at(9, 45)));
        assert!(b.overlaps(at(8, 30), at(9, 30)));
        assert!(b.overlaps(at(9, 30), at(10, 30)));

        // Adjacent intervals do not overlap
        assert!(!b.overlaps(at(8, 0), at(9, 0)));
        assert!(!b.overlaps(at(10, 0), at(11, 0)));
    }

    #[test]
    fn test_terminal_statuses_do_not_block() {
        let mut b = booking(at(9, 0), at(10, 0));

        for status in [
            BookingStatus::Cancelled,
            BookingStatus::Completed,
            BookingStatus::NoShow,
        ] {
            b.set_status(status);
            assert!(!b.is_active());
        }

        b.set_status(BookingStatus::Confirmed);
        assert!(b.is_active());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
            BookingStatus::NoShow,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("unknown"), None);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BookingStatus::NoShow).unwrap();
        assert_eq!(json, "\"no_show\"");
    }
}
