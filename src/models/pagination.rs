//! Fixed-size page windows over catalog listings

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Listings are served 10 records at a time
pub const PAGE_SIZE: i64 = 10;

/// Query string of listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Page number (default: 1)
    pub page: Option<i64>,
}

/// A page number checked against the size of the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub per_page: i64,
    pub num_pages: i64,
}

impl PageWindow {
    /// Resolve `page` (1-based) for a listing of `total` records.
    /// The first page always exists, even for an empty listing.
    pub fn resolve(page: Option<i64>, total: i64, per_page: i64) -> AppResult<Self> {
        let page = page.unwrap_or(1);
        let num_pages = num_pages(total, per_page);
        if page < 1 || page > num_pages {
            return Err(AppError::NotFound(format!("Invalid page ({})", page)));
        }
        Ok(Self {
            page,
            per_page,
            num_pages,
        })
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// Number of pages needed for `total` records, never less than one
pub fn num_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 {
        return 1;
    }
    (total + per_page - 1) / per_page
}

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Records of this page
    pub items: Vec<T>,
    /// Total number of records
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Records per page
    pub per_page: i64,
    /// Number of pages
    pub num_pages: i64,
}

impl<T> PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(items: Vec<T>, total: i64, window: PageWindow) -> Self {
        Self {
            items,
            total,
            page: window.page,
            per_page: window.per_page,
            num_pages: window.num_pages,
        }
    }
}
