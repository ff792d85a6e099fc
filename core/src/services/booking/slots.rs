//! Slot enumeration over a day's schedule blocks.
//!
//! Pure functions: the service fetches the schedule and bookings, this
//! module does the sweep. Blocks are walked in stored order and slots from
//! overlapping blocks are not de-duplicated.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::TimeBlock;

/// Candidate start times step forward in increments of this many minutes
pub const SLOT_STEP_MINUTES: i64 = 15;

/// Trailing buffer added to every existing booking before slot generation,
/// modelling mandatory rest time between sessions. Applied only here; the
/// booking-creation conflict check uses no buffer.
pub const POST_SESSION_BUFFER_MINUTES: i64 = 15;

/// The only session durations a slot query may request
pub const ALLOWED_DURATIONS_MINUTES: [i64; 2] = [30, 60];

/// Half-open interval overlap: `[a_start, a_end)` against `[b_start, b_end)`
pub(crate) fn intervals_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Expand bookings into blocked intervals `[start, end + buffer)`
pub(crate) fn blocked_intervals(bookings: &[Booking]) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let buffer = Duration::minutes(POST_SESSION_BUFFER_MINUTES);
    bookings
        .iter()
        .map(|b| (b.start_time, b.end_time + buffer))
        .collect()
}

/// Enumerate valid slot start times for one day.
///
/// For each block, candidates step from the block start in fixed increments;
/// a candidate is kept when it fits inside the block
/// (`candidate + duration <= block_end`) and overlaps none of the blocked
/// intervals. Output is "HH:MM" strings in encounter order.
pub(crate) fn enumerate_slots(
    date: NaiveDate,
    blocks: &[TimeBlock],
    blocked: &[(NaiveDateTime, NaiveDateTime)],
    duration: Duration,
) -> Vec<String> {
    let step = Duration::minutes(SLOT_STEP_MINUTES);
    let mut slots = Vec::new();

    for block in blocks {
        let block_end = date.and_time(block.end);
        let mut candidate = date.and_time(block.start);

        while candidate + duration <= block_end {
            let candidate_end = candidate + duration;
            let free = blocked
                .iter()
                .all(|&(b_start, b_end)| !intervals_overlap(candidate, candidate_end, b_start, b_end));
            if free {
                slots.push(candidate.format("%H:%M").to_string());
            }
            candidate += step;
        }
    }

    slots
}
