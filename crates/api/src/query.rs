//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

/// Default page size for listings.
pub const DEFAULT_LIMIT: i64 = 20;

/// Maximum page size for listings.
pub const MAX_LIMIT: i64 = 100;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Limit clamped to `1..=MAX_LIMIT`, defaulting to [`DEFAULT_LIMIT`].
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Offset, never negative.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// `?date=YYYY-MM-DD` filter.
#[derive(Debug, Deserialize)]
pub struct DateParams {
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_and_clamps() {
        let p = PaginationParams {
            limit: None,
            offset: None,
        };
        assert_eq!((p.limit(), p.offset()), (20, 0));

        let p = PaginationParams {
            limit: Some(500),
            offset: Some(-3),
        };
        assert_eq!((p.limit(), p.offset()), (100, 0));

        let p = PaginationParams {
            limit: Some(0),
            offset: Some(40),
        };
        assert_eq!((p.limit(), p.offset()), (1, 40));
    }
}
