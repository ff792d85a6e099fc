//! Route handlers, grouped by resource.
//!
//! Handlers are generic over the repository traits so the same functions
//! serve the MySQL implementations in production and the in-memory mocks
//! in integration tests.

use std::sync::Arc;

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};
use tf_core::services::auth::AuthService;
use tf_core::services::booking::BookingService;
use tf_core::services::token::TokenService;

pub mod auth;
pub mod bookings;
pub mod users;

/// Shared application state injected into every handler
pub struct AppState<U, T, B>
where
    U: UserRepository,
    T: TutorRepository,
    B: BookingRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub booking_service: Arc<BookingService<B, T>>,
    pub token_service: Arc<TokenService>,
    pub user_repository: Arc<U>,
    pub tutor_repository: Arc<T>,
}
