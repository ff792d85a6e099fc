//! Common type definitions shared across crates

mod pagination;
mod response;

pub use pagination::{PaginatedResponse, Pagination, MAX_PER_PAGE};
pub use response::ApiResponse;
