//! HTTP client types for ShipStation API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the ShipStation v2 API.
//!
//! # Overview
//!
//! - [`Transport`]: The seam the rest of the crate calls through
//! - [`HttpClient`]: The reqwest-backed [`Transport`] implementation
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Unified error type for transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{ApiKey, ShipStationConfig};
//! use shipstation_api::clients::{HttpClient, Transport};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("my-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//! let response = client.get("/v2/warehouses", None).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call is attempted once and failures are returned to the
//! caller, who decides whether the next input row still runs.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

#[cfg(test)]
pub(crate) mod scripted;

pub use errors::{
    status_message, BillingPlanError, HttpError, HttpResponseError, InvalidHttpRequestError,
    BILLING_PLAN_MARKER,
};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use transport::Transport;
