//! Pagination utilities for service layer
//!
//! Listings take an offset (`skip`) and a page size (`limit`); the page size
//! is clamped to a configured maximum before it reaches the database.

/// Default number of rows per page.
pub const DEFAULT_LIMIT: u64 = 100;
/// Default upper bound for `limit`.
pub const DEFAULT_MAX_LIMIT: u64 = 500;
/// Largest offset the SQL drivers accept (they bind signed 64-bit integers).
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Offset pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip from the start of the ordered listing
    pub skip: u64,
    /// maximum rows to return; 0 yields an empty page
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

    /// Clamp `limit` to `max` and `skip` to [`MAX_SKIP`].
    pub fn normalize(self, max: u64) -> Self {
        Self { skip: self.skip.min(MAX_SKIP), limit: self.limit.min(max) }
    }

    pub fn is_empty(&self) -> bool { self.limit == 0 }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}
