//! Request and response bodies for the HTTP API.
//!
//! Requests validate shape and ranges here; business rules stay in the
//! core services. Responses never expose credential material.

pub mod auth;
pub mod booking;
pub mod tutor;
pub mod user;
