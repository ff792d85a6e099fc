//! Authentication endpoints: registration, login, token refresh, logout
//! and the current-user lookup.

pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;
