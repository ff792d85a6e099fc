//! Domain entities representing core business objects.

pub mod booking;
pub mod token;
pub mod tutor;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use token::{
    Claims, TokenPair, TokenUse, ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use tutor::TutorProfile;
pub use user::{Principal, User, UserProfile, UserRole};
