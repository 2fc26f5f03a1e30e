//! Operations and their resolution to concrete REST endpoints.
//!
//! # Example
//!
//! ```rust
//! use shipstation_api::clients::HttpMethod;
//! use shipstation_api::resources::{BodyKind, Endpoint, Operation, ResourceKind};
//!
//! let endpoint = Endpoint::resolve(ResourceKind::Label, Operation::Void, Some("se-123")).unwrap();
//! assert_eq!(endpoint.method, HttpMethod::Put);
//! assert_eq!(endpoint.path, "/v2/labels/se-123/void");
//! assert_eq!(endpoint.body, BodyKind::EmptyObject);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, HttpResponse, Transport};
use crate::resources::{ApiError, ResourceKind};

/// An operation a caller can select for a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// List a collection, one page or every page.
    List,
    /// Fetch a single resource by id.
    Get,
    /// Create a resource from a JSON payload.
    Create,
    /// Update a resource from a JSON payload.
    Update,
    /// Delete a resource by id.
    Delete,
    /// Cancel a shipment.
    Cancel,
    /// Void a label.
    Void,
    /// Process a batch.
    Process,
    /// Calculate shipping rates.
    Calculate,
}

impl Operation {
    /// Every operation.
    pub const ALL: [Self; 9] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Cancel,
        Self::Void,
        Self::Process,
        Self::Calculate,
    ];

    /// Returns the parameter name used by callers (e.g. `"list"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Cancel => "cancel",
            Self::Void => "void",
            Self::Process => "process",
            Self::Calculate => "calculate",
        }
    }

    /// Looks an operation up by its parameter name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an endpoint expects as a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// No body (GET, DELETE).
    None,
    /// An empty JSON object, for action endpoints.
    EmptyObject,
    /// The caller's JSON payload.
    Payload,
}

/// A resolved REST call: method, path and body expectation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute API path, e.g. `/v2/shipments/se-1/cancel`.
    pub path: String,
    /// What to send as the body.
    pub body: BodyKind,
}

impl Endpoint {
    /// Resolves the endpoint for `operation` on `kind`.
    ///
    /// Ids are percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnknownOperation`] if the resource does not offer the operation
    /// - [`ApiError::MissingId`] if the operation needs an id and none (or an empty one) was given
    pub fn resolve(
        kind: ResourceKind,
        operation: Operation,
        id: Option<&str>,
    ) -> Result<Self, ApiError> {
        if !kind.supports(operation) {
            return Err(ApiError::UnknownOperation {
                resource: kind.name().to_string(),
                operation: operation.name().to_string(),
            });
        }

        let collection = kind.collection_path();
        let item_path = || -> Result<String, ApiError> {
            let id = id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or(ApiError::MissingId {
                    resource: kind,
                    operation,
                })?;
            Ok(format!("{collection}/{}", urlencoding::encode(id)))
        };

        let endpoint = match (kind, operation) {
            (ResourceKind::Inventory, Operation::Update) => {
                Self::new(HttpMethod::Post, collection.clone(), BodyKind::Payload)
            }
            (_, Operation::List) => Self::new(HttpMethod::Get, collection.clone(), BodyKind::None),
            (_, Operation::Get) => Self::new(HttpMethod::Get, item_path()?, BodyKind::None),
            (_, Operation::Create | Operation::Calculate) => {
                Self::new(HttpMethod::Post, collection.clone(), BodyKind::Payload)
            }
            (_, Operation::Update) => Self::new(HttpMethod::Put, item_path()?, BodyKind::Payload),
            (_, Operation::Delete) => Self::new(HttpMethod::Delete, item_path()?, BodyKind::None),
            (_, Operation::Cancel) => Self::new(
                HttpMethod::Post,
                format!("{}/cancel", item_path()?),
                BodyKind::EmptyObject,
            ),
            (_, Operation::Void) => Self::new(
                HttpMethod::Put,
                format!("{}/void", item_path()?),
                BodyKind::EmptyObject,
            ),
            (_, Operation::Process) => Self::new(
                HttpMethod::Post,
                format!("{}/process", item_path()?),
                BodyKind::EmptyObject,
            ),
        };

        Ok(endpoint)
    }

    const fn new(method: HttpMethod, path: String, body: BodyKind) -> Self {
        Self { method, path, body }
    }

    /// Sends this endpoint's request through `transport`.
    ///
    /// `payload` is used only by [`BodyKind::Payload`] endpoints, where a
    /// missing payload is sent as `{}`. Listing query parameters are not
    /// handled here; see [`crate::pagination`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn send<T: Transport>(
        &self,
        transport: &T,
        payload: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let body = match self.body {
            BodyKind::None => None,
            BodyKind::EmptyObject => Some(Value::Object(Map::new())),
            BodyKind::Payload => Some(payload.unwrap_or_else(|| Value::Object(Map::new()))),
        };

        let response = match (self.method, body) {
            (HttpMethod::Get, _) => transport.get(&self.path, None).await?,
            (HttpMethod::Delete, _) => transport.delete(&self.path).await?,
            (HttpMethod::Post, body) => {
                transport
                    .post(&self.path, body.unwrap_or_else(|| Value::Object(Map::new())))
                    .await?
            }
            (HttpMethod::Put, body) => {
                transport
                    .put(&self.path, body.unwrap_or_else(|| Value::Object(Map::new())))
                    .await?
            }
        };

        Ok(response)
    }
}
