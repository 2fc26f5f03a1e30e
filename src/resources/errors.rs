//! Operation-level error types.
//!
//! [`ApiError`] is what every public operation of this crate returns. It
//! wraps transport failures and adds the cases that arise above the
//! transport: empty bodies, unmapped resource/operation combinations,
//! malformed caller input and undecodable payloads.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::resources::ApiError;
//!
//! match client.get::<Shipment>("se-123").await {
//!     Ok(shipment) => println!("{:?}", shipment.shipment_status),
//!     Err(ApiError::Http(e)) => println!("ShipStation said: {e}"),
//!     Err(ApiError::NoData) => println!("empty response"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;
use crate::resources::{Operation, ResourceKind};

/// Error type for ShipStation operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed or the API answered with a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered successfully but without the data a listing needs.
    #[error("No data received from ShipStation API")]
    NoData,

    /// The resource does not offer the selected operation.
    #[error("Unknown operation: {operation} is not available for {resource}")]
    UnknownOperation {
        /// The resource parameter as given.
        resource: String,
        /// The operation parameter as given.
        operation: String,
    },

    /// The resource parameter names no known resource.
    #[error("Unknown resource: {resource}")]
    UnknownResource {
        /// The resource parameter as given.
        resource: String,
    },

    /// The operation targets a single resource but no id was supplied.
    #[error("The {operation} operation on {resource} requires an id")]
    MissingId {
        /// The resource being addressed.
        resource: ResourceKind,
        /// The operation that needs the id.
        operation: Operation,
    },

    /// A caller-supplied parameter had the wrong type.
    #[error("{message}")]
    InvalidParameter {
        /// Description of the mismatch, see [`validation_message`].
        message: String,
    },

    /// The caller's JSON payload could not be parsed.
    #[error("Invalid JSON data: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A response could not be decoded into the requested model.
    #[error("Failed to decode {resource} data: {source}")]
    Decode {
        /// The display name of the resource being decoded.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The credential probe did not return the expected body.
    #[error("Invalid API key or insufficient permissions")]
    InvalidCredentials,
}

impl ApiError {
    /// Returns the HTTP status code behind this error, if there is one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            _ => None,
        }
    }
}

/// Builds the message used for a parameter of the wrong JSON type.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shipstation_api::resources::validation_message;
///
/// assert_eq!(
///     validation_message("page", &json!("two"), "number"),
///     "Invalid page: expected number, got string"
/// );
/// ```
#[must_use]
pub fn validation_message(field: &str, value: &Value, expected_type: &str) -> String {
    let actual = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("Invalid {field}: expected {expected_type}, got {actual}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{BillingPlanError, HttpResponseError};
    use serde_json::json;

    #[test]
    fn test_no_data_message() {
        assert_eq!(
            ApiError::NoData.to_string(),
            "No data received from ShipStation API"
        );
    }

    #[test]
    fn test_unknown_operation_message_names_both_parts() {
        let error = ApiError::UnknownOperation {
            resource: "carrier".to_string(),
            operation: "delete".to_string(),
        };
        let message = error.to_string();
        assert!(message.starts_with("Unknown operation: delete"));
        assert!(message.contains("carrier"));
    }

    #[test]
    fn test_missing_id_message() {
        let error = ApiError::MissingId {
            resource: ResourceKind::Label,
            operation: Operation::Void,
        };
        assert_eq!(error.to_string(), "The void operation on label requires an id");
    }

    #[test]
    fn test_http_error_passes_through_message_and_status() {
        let error: ApiError = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Not Found: Resource not found".to_string(),
            error_reference: None,
        })
        .into();
        assert_eq!(error.to_string(), "Not Found: Resource not found");
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_billing_plan_surfaces_plan_message() {
        let error: ApiError = HttpError::BillingPlan(BillingPlanError { code: 403 }).into();
        assert!(error.to_string().contains("plan does not support this feature"));
        assert_eq!(error.status_code(), Some(403));
    }

    #[test]
    fn test_status_code_absent_for_local_errors() {
        assert_eq!(ApiError::NoData.status_code(), None);
        assert_eq!(ApiError::InvalidCredentials.status_code(), None);
    }

    #[test]
    fn test_validation_message_names_json_types() {
        assert_eq!(
            validation_message("returnAll", &json!(1), "boolean"),
            "Invalid returnAll: expected boolean, got number"
        );
        assert_eq!(
            validation_message("id", &json!(null), "string"),
            "Invalid id: expected string, got null"
        );
        assert_eq!(
            validation_message("options", &json!([1]), "object"),
            "Invalid options: expected object, got array"
        );
    }
}
