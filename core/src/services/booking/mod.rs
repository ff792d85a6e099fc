//! Booking service: conflict checking, availability slot resolution and the
//! booking lifecycle.

mod service;
mod slots;
mod tests;

pub use service::{BookingService, CreateBookingData, UpdateBookingData};
pub use slots::{ALLOWED_DURATIONS_MINUTES, POST_SESSION_BUFFER_MINUTES, SLOT_STEP_MINUTES};
