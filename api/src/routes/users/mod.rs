//! User, profile and tutor-directory endpoints.

pub mod admin;
pub mod profile;
pub mod tutor_profile;
pub mod tutors;
