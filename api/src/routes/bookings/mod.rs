//! Booking endpoints: creation, listing, lifecycle, availability probes
//! and the public slot resolver.

pub mod availability;
pub mod create;
pub mod detail;
pub mod list;
pub mod slots;
