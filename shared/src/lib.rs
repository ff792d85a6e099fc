//! Shared utilities and common types for the TutorFlow server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (email validation, etc.)
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, PaginatedResponse, Pagination};
pub use utils::validation;
