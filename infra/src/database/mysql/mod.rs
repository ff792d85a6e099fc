//! MySQL repository implementations

pub mod booking_repository_impl;
pub mod tutor_repository_impl;
pub mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use tutor_repository_impl::MySqlTutorRepository;
pub use user_repository_impl::MySqlUserRepository;
