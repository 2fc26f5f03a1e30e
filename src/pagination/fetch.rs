//! Single-page and return-all listing over a [`Transport`].
//!
//! # Return-all
//!
//! [`fetch_all`] walks a page-based listing from page 1 at
//! [`MAX_PAGE_SIZE`] items per page and keeps going while the body reports
//! numeric `page` and `pages` with `page < pages`. A body that omits
//! either field ends the walk after that page. Limit-only resources are
//! fetched with a single large `limit` request instead.
//!
//! The first failure aborts the walk: items gathered so far are dropped
//! and no further pages are requested.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::Transport;
use crate::models::PaginationLinks;
use crate::pagination::extract::{extract_items, is_truthy};
use crate::pagination::policy::{PageRequest, MAX_PAGE_SIZE};
use crate::resources::{ApiError, PaginationStyle, ResourceKind};

/// `limit` sent when fetching every item of a limit-only resource.
pub const LIMIT_ONLY_RETURN_ALL: u32 = 1000;

/// Paging metadata reported in a listing body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageMeta {
    /// The page this body holds.
    #[serde(default, deserialize_with = "json_number")]
    pub page: Option<f64>,
    /// The total number of pages.
    #[serde(default, deserialize_with = "json_number")]
    pub pages: Option<f64>,
    /// The total number of items across all pages.
    #[serde(default, deserialize_with = "json_number")]
    pub total: Option<f64>,
    /// Navigation links, when the listing provides them.
    #[serde(default)]
    pub links: Option<PaginationLinks>,
}

impl PageMeta {
    /// Reads paging metadata from a listing body.
    ///
    /// Fields that are missing or not JSON numbers are `None`.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        if !body.is_object() {
            return Self::default();
        }
        Self::deserialize(body).unwrap_or_else(|_| Self {
            links: None,
            ..Self::deserialize(&strip_links(body)).unwrap_or_default()
        })
    }

    /// Returns `true` if the body reported a later page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        matches!((self.page, self.pages), (Some(page), Some(pages)) if page < pages)
    }
}

// Accepts any JSON value; only numbers survive, floats included.
fn json_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn strip_links(body: &Value) -> Value {
    let mut body = body.clone();
    if let Some(map) = body.as_object_mut() {
        map.remove("links");
    }
    body
}

/// One fetched page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedPage {
    /// The unwrapped items.
    pub items: Vec<Value>,
    /// The HTTP status of the response.
    pub status: u16,
    /// Paging metadata from the body.
    pub meta: PageMeta,
}

/// Progress of one return-all walk.
#[derive(Debug)]
pub struct PageState {
    items: Vec<Value>,
    page: u32,
    has_more: bool,
    requests: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    /// Starts a walk at page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            has_more: true,
            requests: 0,
        }
    }

    /// The page the next request should ask for.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns `true` while another request is due.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Number of pages absorbed so far.
    #[must_use]
    pub const fn requests(&self) -> u32 {
        self.requests
    }

    /// Items gathered so far.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Appends a fetched page and decides whether to continue.
    pub fn absorb(&mut self, page: FetchedPage) {
        self.requests += 1;
        self.has_more = page.meta.has_next_page();
        self.items.extend(page.items);
        self.page = self.page.saturating_add(1);
    }

    /// Consumes the state, returning every item gathered.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }
}

/// Fetches one page of `kind`'s listing.
///
/// # Errors
///
/// - [`ApiError::Http`] if the request fails
/// - [`ApiError::NoData`] if the response carried no body
pub async fn fetch_page<T: Transport>(
    transport: &T,
    kind: ResourceKind,
    request: &PageRequest,
) -> Result<FetchedPage, ApiError> {
    let params = request.build_params(kind);
    let response = transport
        .get(&kind.collection_path(), Some(params))
        .await?;

    if !is_truthy(&response.body) {
        return Err(ApiError::NoData);
    }

    Ok(FetchedPage {
        items: extract_items(&response.body),
        status: response.code,
        meta: PageMeta::from_body(&response.body),
    })
}

/// Fetches every item of `kind`'s listing.
///
/// # Errors
///
/// Returns the first error from [`fetch_page`]; no partial result is kept.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::pagination::fetch_all;
/// use shipstation_api::resources::ResourceKind;
///
/// let shipments = fetch_all(&http_client, ResourceKind::Shipment).await?;
/// println!("{} shipments", shipments.len());
/// ```
pub async fn fetch_all<T: Transport>(
    transport: &T,
    kind: ResourceKind,
) -> Result<Vec<Value>, ApiError> {
    if kind.pagination() == PaginationStyle::LimitOnly {
        let request = PageRequest {
            page: 1,
            page_size: LIMIT_ONLY_RETURN_ALL,
            limit: None,
        };
        let page = fetch_page(transport, kind, &request).await?;
        tracing::debug!(
            resource = %kind,
            items = page.items.len(),
            "Fetched limit-only listing"
        );
        return Ok(page.items);
    }

    let mut state = PageState::new();
    while state.has_more() {
        let request = PageRequest {
            page: state.page(),
            page_size: MAX_PAGE_SIZE,
            limit: None,
        };
        let page = fetch_page(transport, kind, &request).await?;
        tracing::debug!(
            resource = %kind,
            page = state.page(),
            items = page.items.len(),
            "Fetched page"
        );
        state.absorb(page);
    }

    tracing::debug!(
        resource = %kind,
        requests = state.requests(),
        items = state.items().len(),
        "Fetched all pages"
    );
    Ok(state.into_items())
}
