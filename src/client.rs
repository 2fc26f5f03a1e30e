//! Typed facade over a [`Transport`].
//!
//! [`ShipStationClient`] binds each call to a model through the
//! [`Resource`] trait, so the collection path comes from the model type:
//!
//! ```rust,ignore
//! use shipstation_api::{ApiKey, ShipStationClient, ShipStationConfig};
//! use shipstation_api::models::{Shipment, Warehouse};
//! use shipstation_api::pagination::PaginationOptions;
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("my-key")?)
//!     .build()?;
//! let client = ShipStationClient::new(&config)?;
//!
//! client.verify_credentials().await?;
//!
//! let page = client.list::<Shipment>(PaginationOptions::page(1, 100)).await?;
//! for shipment in page.iter() {
//!     println!("{:?}", shipment.shipment_id);
//! }
//!
//! let warehouses: Vec<Warehouse> = client.list_all().await?;
//! ```

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpResponse, Transport};
use crate::config::ShipStationConfig;
use crate::models::{RateResponse, Resource};
use crate::pagination::{fetch_all, fetch_page, PageMeta, PageRequest, PaginationOptions};
use crate::resources::{ApiError, Endpoint, Operation, ResourceKind};

/// Path probed by [`ShipStationClient::verify_credentials`].
pub const CREDENTIAL_PROBE_PATH: &str = "/v2/carriers";

/// One page of typed items with its paging metadata.
///
/// Dereferences to the item vector.
#[derive(Clone, Debug)]
pub struct ListPage<R> {
    items: Vec<R>,
    status: u16,
    meta: PageMeta,
}

impl<R> ListPage<R> {
    /// The HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Paging metadata reported with the page.
    #[must_use]
    pub const fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Returns `true` if the body reported a later page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.meta.has_next_page()
    }

    /// Returns `true` if the body reported an earlier page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.meta.page.is_some_and(|page| page > 1.0)
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<R> {
        self.items
    }
}

impl<R> Deref for ListPage<R> {
    type Target = Vec<R>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Typed ShipStation client.
///
/// Generic over its [`Transport`] so tests can substitute one; production
/// code uses the default [`HttpClient`].
#[derive(Debug)]
pub struct ShipStationClient<T = HttpClient> {
    transport: T,
}

// Verify ShipStationClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStationClient>();
};

impl ShipStationClient<HttpClient> {
    /// Creates a client backed by [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ShipStationConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(HttpClient::new(config)?))
    }
}

impl<T: Transport> ShipStationClient<T> {
    /// Creates a client over an existing transport.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches one page of `R`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnknownOperation`] if `R` cannot be listed
    /// - [`ApiError::NoData`] if the response carried no body
    /// - [`ApiError::Decode`] if an item does not match `R`
    /// - [`ApiError::Http`] if the request fails
    pub async fn list<R: Resource>(
        &self,
        options: PaginationOptions,
    ) -> Result<ListPage<R>, ApiError> {
        Endpoint::resolve(R::KIND, Operation::List, None)?;
        let request = PageRequest::normalize(options);
        let page = fetch_page(&self.transport, R::KIND, &request).await?;

        Ok(ListPage {
            items: decode_all(page.items)?,
            status: page.status,
            meta: page.meta,
        })
    }

    /// Fetches every page of `R`.
    ///
    /// # Errors
    ///
    /// Same as [`list`](Self::list); the first failure aborts the walk.
    pub async fn list_all<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        Endpoint::resolve(R::KIND, Operation::List, None)?;
        decode_all(fetch_all(&self.transport, R::KIND).await?)
    }

    /// Fetches one `R` by id.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingId`] if `id` is blank
    /// - [`ApiError::NoData`] if the response carried no body
    /// - [`ApiError::Decode`] if the body does not match `R`
    /// - [`ApiError::Http`] if the request fails
    pub async fn get<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        let response = self.call(R::KIND, Operation::Get, Some(id), None).await?;
        decode_body(response)
    }

    /// Creates `resource` and returns the stored version.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn create<R: Resource>(&self, resource: &R) -> Result<R, ApiError> {
        let payload = to_payload(resource)?;
        let response = self
            .call(R::KIND, Operation::Create, None, Some(payload))
            .await?;
        decode_body(response)
    }

    /// Replaces the resource `id` with `resource`.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn update<R: Resource>(&self, id: &str, resource: &R) -> Result<R, ApiError> {
        let payload = to_payload(resource)?;
        let response = self
            .call(R::KIND, Operation::Update, Some(id), Some(payload))
            .await?;
        decode_body(response)
    }

    /// Deletes the resource `id`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnknownOperation`] if `R` cannot be deleted
    /// - [`ApiError::MissingId`] if `id` is blank
    /// - [`ApiError::Http`] if the request fails
    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        self.call(R::KIND, Operation::Delete, Some(id), None).await?;
        Ok(())
    }

    /// Cancels a shipment, returning the response body.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingId`] or [`ApiError::Http`].
    pub async fn cancel_shipment(&self, id: &str) -> Result<Value, ApiError> {
        let response = self
            .call(ResourceKind::Shipment, Operation::Cancel, Some(id), None)
            .await?;
        Ok(response.body)
    }

    /// Voids a label, returning the response body.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingId`] or [`ApiError::Http`].
    pub async fn void_label(&self, id: &str) -> Result<Value, ApiError> {
        let response = self
            .call(ResourceKind::Label, Operation::Void, Some(id), None)
            .await?;
        Ok(response.body)
    }

    /// Queues a batch for label generation, returning the response body.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingId`] or [`ApiError::Http`].
    pub async fn process_batch(&self, id: &str) -> Result<Value, ApiError> {
        let response = self
            .call(ResourceKind::Batch, Operation::Process, Some(id), None)
            .await?;
        Ok(response.body)
    }

    /// Calculates rates for the shipment described by `request`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Decode`] if the request cannot be serialized or the answer decoded
    /// - [`ApiError::Http`] if the request fails
    pub async fn calculate_rates<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> Result<RateResponse, ApiError> {
        let payload = serde_json::to_value(request).map_err(|source| ApiError::Decode {
            resource: ResourceKind::Rate.display_name(),
            source,
        })?;
        let response = self
            .call(ResourceKind::Rate, Operation::Calculate, None, Some(payload))
            .await?;
        decode_value(ResourceKind::Rate, response.body)
    }

    /// Posts inventory adjustments, returning the response body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] if the request fails.
    pub async fn update_inventory(&self, payload: Value) -> Result<Value, ApiError> {
        let response = self
            .call(ResourceKind::Inventory, Operation::Update, None, Some(payload))
            .await?;
        Ok(response.body)
    }

    /// Checks that the configured API key is accepted.
    ///
    /// Probes [`CREDENTIAL_PROBE_PATH`] and requires a JSON object with a
    /// `carriers` field.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidCredentials`] if the probe is rejected with 401 or
    ///   403, or answers without a `carriers` field
    /// - [`ApiError::Http`] for any other failure
    pub async fn verify_credentials(&self) -> Result<(), ApiError> {
        let response = match self.transport.get(CREDENTIAL_PROBE_PATH, None).await {
            Ok(response) => response,
            Err(e) if matches!(e.status_code(), Some(401 | 403)) => {
                tracing::debug!(status = e.status_code(), "Credential probe rejected");
                return Err(ApiError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        if response.body.get("carriers").is_some() {
            Ok(())
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }

    async fn call(
        &self,
        kind: ResourceKind,
        operation: Operation,
        id: Option<&str>,
        payload: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let endpoint = Endpoint::resolve(kind, operation, id)?;
        endpoint.send(&self.transport, payload).await
    }
}

fn to_payload<R: Resource>(resource: &R) -> Result<Value, ApiError> {
    serde_json::to_value(resource).map_err(|source| ApiError::Decode {
        resource: R::KIND.display_name(),
        source,
    })
}

fn decode_value<R: serde::de::DeserializeOwned>(
    kind: ResourceKind,
    value: Value,
) -> Result<R, ApiError> {
    if value.is_null() {
        return Err(ApiError::NoData);
    }
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        resource: kind.display_name(),
        source,
    })
}

fn decode_body<R: Resource>(response: HttpResponse) -> Result<R, ApiError> {
    decode_value(R::KIND, response.body)
}

fn decode_all<R: Resource>(items: Vec<Value>) -> Result<Vec<R>, ApiError> {
    items
        .into_iter()
        .map(|item| decode_value(R::KIND, item))
        .collect()
}
