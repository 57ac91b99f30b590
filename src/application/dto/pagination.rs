use serde::{Deserialize, Serialize};

/// Offset pagination envelope mirroring the wire shape consumed by the
/// routing layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedPage<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedPage<T> {
    pub fn new(data: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        let total_pages = total.div_ceil(u64::from(limit));
        Self {
            data,
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages,
                has_next: u64::from(page) * u64::from(limit) < total,
                has_prev: page > 1,
            },
        }
    }
}
