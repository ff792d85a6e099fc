//! # Infrastructure Layer
//!
//! Concrete persistence for the TutorFlow backend: a MySQL connection pool
//! and SQLx implementations of the core repository traits. The API layer
//! wires these into the services; nothing in here contains business rules.

use thiserror::Error;

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlBookingRepository, MySqlTutorRepository, MySqlUserRepository};

/// Errors raised while setting up infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
