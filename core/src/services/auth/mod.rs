//! Authentication service: registration, login, token refresh.

mod config;
pub mod password;
mod service;
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, AuthenticatedUser, RegisterData};
