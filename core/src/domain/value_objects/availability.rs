//! Result of a zero-buffer availability probe for a proposed interval.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Booking;

/// Outcome of checking a proposed `[start, end)` interval against a tutor's
/// active bookings. No buffer is applied at this layer; buffer semantics
/// belong to the slot resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityCheck {
    pub tutor_id: Uuid,

    pub start_time: NaiveDateTime,

    pub end_time: NaiveDateTime,

    pub is_available: bool,

    /// Active bookings overlapping the requested interval
    pub conflicting_bookings: Vec<Booking>,
}

impl AvailabilityCheck {
    pub fn new(
        tutor_id: Uuid,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        conflicting_bookings: Vec<Booking>,
    ) -> Self {
        Self {
            tutor_id,
            start_time,
            end_time,
            is_available: conflicting_bookings.is_empty(),
            conflicting_bookings,
        }
    }
}
