//! Business services containing domain logic and use cases.

pub mod auth;
pub mod booking;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use booking::{
    BookingService, CreateBookingData, UpdateBookingData, ALLOWED_DURATIONS_MINUTES,
    POST_SESSION_BUFFER_MINUTES, SLOT_STEP_MINUTES,
};
pub use token::{TokenService, TokenServiceConfig};
