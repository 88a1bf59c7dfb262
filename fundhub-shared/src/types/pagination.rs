use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult, ErrorCode};

pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 { 1 }
fn default_per_page() -> u64 { 20 }

impl PaginationParams {
    /// Rejects page and page-size values that cannot address any rows.
    pub fn validate(&self) -> AppResult<()> {
        if self.page == 0 {
            return Err(AppError::new(ErrorCode::InvalidPagination, "page must be at least 1"));
        }
        if self.per_page == 0 {
            return Err(AppError::new(ErrorCode::InvalidPagination, "per_page must be at least 1"));
        }
        // SQL OFFSET is a signed 64-bit value.
        if i64::try_from(self.offset()).is_err() {
            return Err(AppError::new(ErrorCode::InvalidPagination, "page is out of range"));
        }
        Ok(())
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }

    pub fn limit(&self) -> u64 {
        self.per_page.min(MAX_PER_PAGE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1, per_page: 20 }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, params: &PaginationParams) -> Self {
        let per_page = params.limit();
        let total_pages = if total == 0 { 0 } else { total.div_ceil(per_page) };
        Self {
            items,
            total,
            page: params.page,
            per_page,
            total_pages,
        }
    }
}
