//! Repository interfaces for data persistence.
//!
//! Each repository module carries the trait (the contract the infra crate
//! implements) and an in-memory mock used by service and API tests.

pub mod booking;
pub mod tutor;
pub mod user;

pub use booking::{BookingListFilter, BookingRepository, MockBookingRepository};
pub use tutor::{MockTutorRepository, TutorListFilter, TutorListing, TutorRepository};
pub use user::{MockUserRepository, UserListFilter, UserRepository};
