use super::Product;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

const DEFAULT_PAGE: NonZeroU32 = match NonZeroU32::new(1) {
    Some(page) => page,
    None => unreachable!(),
};

const DEFAULT_LIMIT: NonZeroU32 = match NonZeroU32::new(10) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// A 1-based page request. Both values are non-zero by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: NonZeroU32,
    #[serde(default = "default_limit")]
    pub limit: NonZeroU32,
}

fn default_page() -> NonZeroU32 {
    DEFAULT_PAGE
}

fn default_limit() -> NonZeroU32 {
    DEFAULT_LIMIT
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationQuery {
    /// Returns `None` when either value is zero.
    pub fn new(page: u32, limit: u32) -> Option<Self> {
        Some(Self {
            page: NonZeroU32::new(page)?,
            limit: NonZeroU32::new(limit)?,
        })
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn skip(&self) -> u64 {
        (u64::from(self.page.get()) - 1) * u64::from(self.limit.get())
    }

    /// Maximum number of rows on the page.
    pub fn take(&self) -> u64 {
        u64::from(self.limit.get())
    }

    /// Builds the page metadata for `total` available rows.
    pub fn meta(&self, total: u64) -> PageMeta {
        PageMeta {
            page: self.page.get(),
            total_pages: total,
            last_page: total.div_ceil(self.take()),
        }
    }
}

/// Metadata returned with every page.
///
/// `total_pages` carries the total number of available products, not a page
/// count. Clients already depend on that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub total_pages: u64,
    pub last_page: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedProducts {
    pub data: Vec<Product>,
    pub meta: PageMeta,
}
