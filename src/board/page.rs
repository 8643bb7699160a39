//! Pagination for list queries.

use crate::{BoardError, Result};

/// Number of records returned per page.
pub const PAGE_SIZE: i64 = 100;

/// A validated 1-based page number.
///
/// Page `n` covers records `(n - 1) * PAGE_SIZE` up to but excluding
/// `n * PAGE_SIZE` in primary key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    /// Create a page, rejecting numbers below 1.
    pub fn new(number: i64) -> Result<Self> {
        if number < 1 {
            return Err(BoardError::Validation(format!(
                "page must be at least 1, got {number}"
            )));
        }
        Ok(Self(number))
    }

    /// The first page.
    pub fn first() -> Self {
        Self(1)
    }

    /// 1-based page number.
    pub fn number(&self) -> i64 {
        self.0
    }

    /// Number of records to skip.
    pub fn offset(&self) -> i64 {
        (self.0 - 1).saturating_mul(PAGE_SIZE)
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}
