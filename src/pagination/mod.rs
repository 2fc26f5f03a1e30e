//! Pagination-aware listing.
//!
//! # Overview
//!
//! - [`PageRequest`] / [`PaginationOptions`]: page size policy and query parameters
//! - [`ListShape`] / [`extract_items`]: normalization of listing bodies
//! - [`fetch_page`] / [`fetch_all`]: one page, or every page
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::pagination::{fetch_page, PageRequest, PaginationOptions};
//! use shipstation_api::resources::ResourceKind;
//!
//! let request = PageRequest::normalize(PaginationOptions::page(2, 100));
//! let page = fetch_page(&http_client, ResourceKind::Warehouse, &request).await?;
//! println!("{} warehouses on page 2", page.items.len());
//! ```

mod extract;
mod fetch;
mod policy;

pub use extract::{extract_items, ListShape};
pub use fetch::{fetch_all, fetch_page, FetchedPage, PageMeta, PageState, LIMIT_ONLY_RETURN_ALL};
pub use policy::{
    has_next_page, has_previous_page, total_pages, PageRequest, PaginationOptions,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
