//! Request middleware: JWT authentication, role enforcement and CORS.

pub mod auth;
pub mod cors;
pub mod role_guard;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
pub use role_guard::RequireRole;
