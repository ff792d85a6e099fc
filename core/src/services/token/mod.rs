//! JWT token issuance and verification

mod config;
mod service;
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
