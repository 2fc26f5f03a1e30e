//! Page-size policy and query parameter construction.
//!
//! [`PageRequest::normalize`] turns loose caller input into a bounded
//! request, and [`PageRequest::build_params`] renders it as the query a
//! resource's listing endpoint understands.

use std::collections::BTreeMap;

use crate::resources::{PaginationStyle, ResourceKind};

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size ShipStation accepts.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Raw pagination input from a caller.
///
/// Every field is optional and a zero counts as "not supplied".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    /// The 1-based page to fetch.
    pub page: Option<u32>,
    /// The requested page size.
    pub page_size: Option<u32>,
    /// An upper bound on the number of items wanted.
    pub limit: Option<u32>,
}

impl PaginationOptions {
    /// Creates options for a single page.
    #[must_use]
    pub const fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            limit: None,
        }
    }

    /// Sets the item limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A bounded page request.
///
/// Values produced by [`PageRequest::normalize`] always satisfy
/// `page >= 1` and `1 <= page_size <= MAX_PAGE_SIZE`. The fields are public
/// so a caller can build an unbounded request on purpose; inventory's
/// return-all does exactly that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// The 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// The caller's limit, carried through to the query.
    pub limit: Option<u32>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            limit: None,
        }
    }
}

impl PageRequest {
    /// Normalizes caller input into a bounded request.
    ///
    /// The page defaults to 1. The page size defaults to
    /// [`DEFAULT_PAGE_SIZE`], is lowered to the limit when one is given and
    /// is then clamped to `1..=MAX_PAGE_SIZE`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::pagination::{PageRequest, PaginationOptions};
    ///
    /// let request = PageRequest::normalize(PaginationOptions::page(3, 1000).with_limit(10));
    /// assert_eq!(request.page, 3);
    /// assert_eq!(request.page_size, 10);
    /// assert_eq!(request.limit, Some(10));
    /// ```
    #[must_use]
    pub fn normalize(options: PaginationOptions) -> Self {
        let supplied = |value: Option<u32>| value.filter(|v| *v > 0);

        let page = supplied(options.page).unwrap_or(1);
        let limit = supplied(options.limit);
        let mut page_size = supplied(options.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        if let Some(limit) = limit {
            page_size = page_size.min(limit);
        }

        Self {
            page,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            limit,
        }
    }

    /// Renders the query parameters for `kind`'s listing endpoint.
    ///
    /// Limit-only resources get just `limit` set to the page size. Other
    /// resources always get `page`, get `page_size` only when it differs
    /// from the default, and get `limit` only when the caller gave one.
    /// No clamping happens here.
    #[must_use]
    pub fn build_params(&self, kind: ResourceKind) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();

        match kind.pagination() {
            PaginationStyle::LimitOnly => {
                params.insert("limit".to_string(), self.page_size.to_string());
            }
            PaginationStyle::PageBased => {
                params.insert("page".to_string(), self.page.to_string());
                if self.page_size != DEFAULT_PAGE_SIZE {
                    params.insert("page_size".to_string(), self.page_size.to_string());
                }
                if let Some(limit) = self.limit {
                    params.insert("limit".to_string(), limit.to_string());
                }
            }
        }

        params
    }
}

/// Number of pages needed to hold `total` items. Zero when `page_size` is zero.
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}

/// Returns `true` if a page follows `page` out of `pages`.
#[must_use]
pub const fn has_next_page(page: u64, pages: u64) -> bool {
    page < pages
}

/// Returns `true` if a page precedes `page`.
#[must_use]
pub const fn has_previous_page(page: u64) -> bool {
    page > 1
}
