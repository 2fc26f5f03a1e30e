//! Row-level execution of resource operations.
//!
//! An automation host hands over a batch of input rows, each carrying a
//! resource name, an operation name and their parameters. Rows are
//! executed strictly one after another; every output item is paired with
//! the index of the row that produced it.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use shipstation_api::execution::{execute_rows, ExecutionOptions, OperationRequest};
//!
//! let rows = [
//!     json!({"resource": "shipment", "operation": "list", "options": {"returnAll": true}}),
//!     json!({"resource": "label", "operation": "void", "id": "se-799373193"}),
//! ];
//!
//! let output = execute_rows(
//!     &http_client,
//!     rows.iter().map(OperationRequest::from_node_parameters),
//!     ExecutionOptions { continue_on_fail: true },
//! )
//! .await?;
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clients::Transport;
use crate::pagination::{fetch_all, fetch_page, PageRequest, PaginationOptions};
use crate::resources::{validation_message, ApiError, BodyKind, Endpoint, Operation, ResourceKind};

/// Listing options of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// The page to fetch when not returning everything.
    pub page: Option<u32>,
    /// The page size when not returning everything.
    pub page_size: Option<u32>,
    /// Fetch every page instead of one.
    pub return_all: bool,
}

/// One row's operation and its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationRequest {
    resource: ResourceKind,
    operation: Operation,
    id: Option<String>,
    json_data: Option<String>,
    list_options: ListOptions,
}

impl OperationRequest {
    /// Creates a request for a known resource and operation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownOperation`] if `resource` does not offer
    /// `operation`.
    pub fn new(resource: ResourceKind, operation: Operation) -> Result<Self, ApiError> {
        if !resource.supports(operation) {
            return Err(ApiError::UnknownOperation {
                resource: resource.name().to_string(),
                operation: operation.name().to_string(),
            });
        }
        Ok(Self {
            resource,
            operation,
            id: None,
            json_data: None,
            list_options: ListOptions::default(),
        })
    }

    /// Creates a request from resource and operation names such as
    /// `"shipment"` and `"list"`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnknownResource`] if the resource name is unknown
    /// - [`ApiError::UnknownOperation`] if the operation name is unknown or
    ///   not offered by the resource
    pub fn from_parameters(resource: &str, operation: &str) -> Result<Self, ApiError> {
        let kind: ResourceKind = resource.parse()?;
        let op = Operation::from_name(operation).ok_or_else(|| ApiError::UnknownOperation {
            resource: resource.to_string(),
            operation: operation.to_string(),
        })?;
        Self::new(kind, op)
    }

    /// Creates a request from a row's parameter object.
    ///
    /// Recognized keys: `resource`, `operation`, `id`, `jsonData` and
    /// `options` (`page`, `pageSize`, `returnAll`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidParameter`] if a key holds the wrong JSON type
    /// - otherwise as [`from_parameters`](Self::from_parameters)
    pub fn from_node_parameters(parameters: &Value) -> Result<Self, ApiError> {
        let resource = required_str(parameters, "resource")?;
        let operation = required_str(parameters, "operation")?;
        let mut request = Self::from_parameters(resource, operation)?;

        if let Some(id) = optional_str(parameters, "id")? {
            request = request.id(id);
        }
        if let Some(json_data) = optional_str(parameters, "jsonData")? {
            request = request.json_data(json_data);
        }

        match parameters.get("options") {
            None | Some(Value::Null) => {}
            Some(Value::Object(options)) => {
                request = request.list_options(ListOptions {
                    page: optional_u32(options, "page")?,
                    page_size: optional_u32(options, "pageSize")?,
                    return_all: optional_bool(options, "returnAll")?.unwrap_or(false),
                });
            }
            Some(other) => {
                return Err(ApiError::InvalidParameter {
                    message: validation_message("options", other, "object"),
                });
            }
        }

        Ok(request)
    }

    /// Sets the id of the targeted resource.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the raw JSON payload, parsed when the row executes.
    #[must_use]
    pub fn json_data(mut self, json_data: impl Into<String>) -> Self {
        self.json_data = Some(json_data.into());
        self
    }

    /// Sets the listing options.
    #[must_use]
    pub const fn list_options(mut self, options: ListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// The targeted resource.
    #[must_use]
    pub const fn resource(&self) -> ResourceKind {
        self.resource
    }

    /// The selected operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    // Missing JSON data counts as `{}`.
    fn payload(&self) -> Result<Value, ApiError> {
        match self.json_data.as_deref() {
            None => Ok(Value::Object(Map::new())),
            Some(text) => serde_json::from_str(text).map_err(ApiError::InvalidJson),
        }
    }
}

fn required_str<'a>(parameters: &'a Value, field: &str) -> Result<&'a str, ApiError> {
    match parameters.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        other => Err(ApiError::InvalidParameter {
            message: validation_message(field, other.unwrap_or(&Value::Null), "string"),
        }),
    }
}

fn optional_str<'a>(parameters: &'a Value, field: &str) -> Result<Option<&'a str>, ApiError> {
    match parameters.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(ApiError::InvalidParameter {
            message: validation_message(field, other, "string"),
        }),
    }
}

fn optional_u32(options: &Map<String, Value>, field: &str) -> Result<Option<u32>, ApiError> {
    match options.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .or_else(|| value.as_f64().and_then(whole_f64))
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| ApiError::InvalidParameter {
                message: validation_message(field, value, "whole number"),
            }),
    }
}

// Host number parameters may arrive as `2.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_f64(n: f64) -> Option<u64> {
    (n.fract() == 0.0 && n >= 0.0 && n <= f64::from(u32::MAX)).then_some(n as u64)
}

fn optional_bool(options: &Map<String, Value>, field: &str) -> Result<Option<bool>, ApiError> {
    match options.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ApiError::InvalidParameter {
            message: validation_message(field, other, "boolean"),
        }),
    }
}

/// Batch execution settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Record a failing row as an `{"error": message}` item and keep going.
    pub continue_on_fail: bool,
}

/// One output item, paired with the row that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputItem {
    /// The item.
    pub json: Value,
    /// Index of the input row.
    pub paired_item: usize,
}

/// A row failed and the batch was stopped.
#[derive(Debug, Error)]
#[error("{source} [item {item_index}]")]
pub struct ExecutionError {
    /// Index of the failing row.
    pub item_index: usize,
    /// What went wrong.
    #[source]
    pub source: ApiError,
}

/// Executes one row.
///
/// Listings return one value per item. Every other operation returns the
/// response body as a single value, `null` when the body was empty.
///
/// # Errors
///
/// - [`ApiError::MissingId`] if the operation needs an id and has none
/// - [`ApiError::InvalidJson`] if the payload does not parse
/// - [`ApiError::NoData`] if a listing came back empty
/// - [`ApiError::Http`] if a request fails
pub async fn execute_operation<T: Transport>(
    transport: &T,
    request: &OperationRequest,
) -> Result<Vec<Value>, ApiError> {
    let kind = request.resource;

    if request.operation == Operation::List {
        Endpoint::resolve(kind, Operation::List, None)?;
        let options = request.list_options;
        if options.return_all {
            return fetch_all(transport, kind).await;
        }
        let page_request = PageRequest::normalize(PaginationOptions {
            page: options.page,
            page_size: options.page_size,
            limit: None,
        });
        return Ok(fetch_page(transport, kind, &page_request).await?.items);
    }

    let endpoint = Endpoint::resolve(kind, request.operation, request.id.as_deref())?;
    let payload = match endpoint.body {
        BodyKind::Payload => Some(request.payload()?),
        BodyKind::None | BodyKind::EmptyObject => None,
    };
    let response = endpoint.send(transport, payload).await?;
    Ok(vec![response.body])
}

/// Executes rows in order.
///
/// Rows are given as parse results so that a row whose parameters failed
/// to parse is handled like any other failing row.
///
/// # Errors
///
/// Without `continue_on_fail`, the first failing row stops the batch and
/// its error is returned with the row index.
pub async fn execute_rows<T, I>(
    transport: &T,
    rows: I,
    options: ExecutionOptions,
) -> Result<Vec<OutputItem>, ExecutionError>
where
    T: Transport,
    I: IntoIterator<Item = Result<OperationRequest, ApiError>>,
{
    let mut output = Vec::new();

    for (item_index, row) in rows.into_iter().enumerate() {
        let result = match row {
            Ok(request) => execute_operation(transport, &request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(items) => output.extend(items.into_iter().map(|json| OutputItem {
                json,
                paired_item: item_index,
            })),
            Err(source) if options.continue_on_fail => {
                tracing::debug!(item_index, error = %source, "Row failed, continuing");
                output.push(OutputItem {
                    json: serde_json::json!({ "error": source.to_string() }),
                    paired_item: item_index,
                });
            }
            Err(source) => return Err(ExecutionError { item_index, source }),
        }
    }

    Ok(output)
}
