//! HTTP client for ShipStation API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] used in production.

use std::collections::{BTreeMap, HashMap};

use crate::clients::errors::{
    status_message, BillingPlanError, HttpError, HttpResponseError, BILLING_PLAN_MARKER,
};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::ShipStationConfig;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the ShipStation API key.
pub const API_KEY_HEADER: &str = "api-key";

/// HTTP client for making requests to the ShipStation API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including `api-key`, `Accept` and `User-Agent`
/// - Error body parsing, including billing plan restrictions
///
/// Requests are attempted exactly once; there is no retry or backoff.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::{ApiKey, ShipStationConfig};
/// use shipstation_api::clients::{HttpClient, Transport};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("my-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let response = client.get("/v2/carriers", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ShipStationConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}ShipStation API Rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the ShipStation API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The account plan excludes the endpoint (`BillingPlan`)
    /// - Any other non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to ShipStation API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(&body_text);

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        Err(Self::error_from_response(&response))
    }

    /// Parses response headers into a `HashMap` keyed by lowercased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses a body as JSON. Empty bodies become `Null`; anything that is
    /// not JSON is kept verbatim under `raw_body`.
    fn parse_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
    }

    /// Builds the error for a non-2xx response.
    fn error_from_response(response: &HttpResponse) -> HttpError {
        let message = Self::error_message(response);

        let top_level = response
            .body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        if top_level.contains(BILLING_PLAN_MARKER) {
            tracing::warn!(
                status = response.code,
                "ShipStation rejected the request because of the account's billing plan"
            );
            return HttpError::BillingPlan(BillingPlanError {
                code: response.code,
            });
        }

        let error_reference = response
            .request_id()
            .map(String::from)
            .or_else(|| {
                response
                    .body
                    .get("request_id")
                    .and_then(serde_json::Value::as_str)
                    .map(String::from)
            });

        HttpError::Response(HttpResponseError {
            code: response.code,
            message,
            error_reference,
        })
    }

    /// Picks the most specific message from an error body.
    ///
    /// Order: top-level `message`, then the `message` of each entry in the
    /// `errors` array joined with `"; "`, then the status description.
    fn error_message(response: &HttpResponse) -> String {
        if let Some(message) = response
            .body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
        {
            return message.to_string();
        }

        let messages: Vec<&str> = response
            .body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.get("message").and_then(serde_json::Value::as_str))
                    .collect()
            })
            .unwrap_or_default();

        if messages.is_empty() {
            status_message(response.code)
        } else {
            messages.join("; ")
        }
    }
}

impl Transport for HttpClient {
    async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()?).await
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()?;
        self.request(request).await
    }

    async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .build()?;
        self.request(request).await
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await
    }
}
