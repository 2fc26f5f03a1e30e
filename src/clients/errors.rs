//! HTTP-specific error types for the ShipStation client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`BillingPlanError`]: The account's plan does not include the endpoint
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::clients::{HttpClient, HttpError, Transport};
//!
//! match client.get("/v2/carriers", None).await {
//!     Ok(response) => println!("Carriers: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::BillingPlan(e)) => println!("{e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Substring ShipStation uses in error messages for plan-tier restrictions.
pub const BILLING_PLAN_MARKER: &str = "upgrade your billing plan";

/// Returns a human-readable description for an HTTP status code.
///
/// Used when the API does not supply its own `message` in an error body.
///
/// # Example
///
/// ```rust
/// use shipstation_api::clients::status_message;
///
/// assert_eq!(status_message(404), "Not Found: Resource not found");
/// assert_eq!(status_message(418), "HTTP 418: Request failed");
/// ```
#[must_use]
pub fn status_message(code: u16) -> String {
    match code {
        400 => "Bad Request: Invalid request parameters".to_string(),
        401 => "Unauthorized: Invalid API key or insufficient permissions".to_string(),
        403 => "Forbidden: Access denied".to_string(),
        404 => "Not Found: Resource not found".to_string(),
        422 => "Unprocessable Entity: Validation failed".to_string(),
        429 => "Too Many Requests: Rate limit exceeded".to_string(),
        500 => "Internal Server Error: ShipStation server error".to_string(),
        503 => "Service Unavailable: ShipStation service temporarily unavailable".to_string(),
        _ => format!("HTTP {code}: Request failed"),
    }
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use shipstation_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "shipment not found".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "shipment not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The API's error message, or a status description when none was sent.
    pub message: String,
    /// Reference ID for error reporting (from the `x-request-id` header).
    pub error_reference: Option<String>,
}

/// Error returned when the account's billing plan excludes an endpoint.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Your ShipStation plan does not support this feature. Please upgrade your plan to use this endpoint.")]
pub struct BillingPlanError {
    /// The HTTP status code of the response.
    pub code: u16,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as a missing body for POST/PUT requests or a body attached
/// to a DELETE.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The endpoint requires a higher ShipStation plan.
    #[error(transparent)]
    BillingPlan(#[from] BillingPlanError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server produced a response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::BillingPlan(e) => Some(e.code),
            Self::InvalidRequest(_) => None,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_known_codes() {
        assert_eq!(status_message(400), "Bad Request: Invalid request parameters");
        assert_eq!(
            status_message(401),
            "Unauthorized: Invalid API key or insufficient permissions"
        );
        assert_eq!(status_message(403), "Forbidden: Access denied");
        assert_eq!(status_message(422), "Unprocessable Entity: Validation failed");
        assert_eq!(status_message(429), "Too Many Requests: Rate limit exceeded");
        assert_eq!(
            status_message(500),
            "Internal Server Error: ShipStation server error"
        );
        assert_eq!(
            status_message(503),
            "Service Unavailable: ShipStation service temporarily unavailable"
        );
    }

    #[test]
    fn test_status_message_unknown_code() {
        assert_eq!(status_message(502), "HTTP 502: Request failed");
    }

    #[test]
    fn test_billing_plan_error_message() {
        let error = BillingPlanError { code: 403 };
        assert!(error.to_string().contains("does not support this feature"));
        assert!(error.to_string().contains("upgrade your plan"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_http_error_status_code() {
        let error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "missing".to_string(),
            error_reference: None,
        });
        assert_eq!(error.status_code(), Some(404));

        let error = HttpError::BillingPlan(BillingPlanError { code: 402 });
        assert_eq!(error.status_code(), Some(402));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::UnexpectedBody {
            method: "delete".to_string(),
        });
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_response_error_displays_message_transparently() {
        let error: HttpError = HttpResponseError {
            code: 400,
            message: "ship_to is required".to_string(),
            error_reference: None,
        }
        .into();
        assert_eq!(error.to_string(), "ship_to is required");
    }
}
