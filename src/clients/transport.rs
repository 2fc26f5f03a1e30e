//! The transport seam used by pagination and the typed client.
//!
//! Everything above this trait (page loops, endpoint dispatch, the row
//! executor) talks to ShipStation only through [`Transport`], so tests can
//! substitute a scripted implementation for [`HttpClient`](crate::clients::HttpClient).

use std::collections::BTreeMap;

use crate::clients::{HttpError, HttpResponse};

/// Performs authenticated calls against the ShipStation API.
///
/// Implementations return `Ok` only for 2xx responses; any other status
/// is reported as an [`HttpError`]. Paths are absolute API paths such as
/// `/v2/shipments`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a GET request with optional query parameters.
    async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError>;

    /// Sends a POST request with a JSON body.
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError>;

    /// Sends a PUT request with a JSON body.
    async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError>;

    /// Sends a DELETE request.
    async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError>;
}
