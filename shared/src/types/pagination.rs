//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Maximum number of items returned per page
pub const MAX_PER_PAGE: u32 = 1000;

/// Minimum number of items returned per page
const MIN_PER_PAGE: u32 = 1;

/// Default number of items returned per page
fn default_limit() -> u32 {
    20
}

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items to skip
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl Pagination {
    /// Create new pagination parameters, clamping the limit
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.limit = self.limit.clamp(MIN_PER_PAGE, MAX_PER_PAGE);
        self
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.skip as i64
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Number of items skipped
    pub skip: u32,

    /// Requested page size
    pub limit: u32,

    /// Total number of matching items, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a page of items
    pub fn new(data: Vec<T>, pagination: &Pagination) -> Self {
        Self {
            data,
            skip: pagination.skip,
            limit: pagination.limit,
            total: None,
        }
    }

    /// Attach a total count
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }
}
