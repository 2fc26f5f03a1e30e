//! # ShipStation API Rust Client
//!
//! A Rust client for the ShipStation v2 shipping API, providing validated
//! configuration, an authenticated HTTP transport, pagination-aware
//! listing and typed resource operations.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShipStationConfig`] and [`ShipStationConfigBuilder`]
//! - An async HTTP transport that authenticates with the `api-key` header
//! - Listing that follows ShipStation's page-based pagination via [`pagination`]
//! - Normalization of the different listing body shapes into a flat item list
//! - Typed models and a typed facade, [`ShipStationClient`]
//! - A row executor for automation hosts via [`execution`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shipstation_api::{ApiKey, ShipStationConfig};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.shipstation.com");
//! ```
//!
//! ## Listing Resources
//!
//! ```rust,ignore
//! use shipstation_api::{ShipStationClient, ShipStationConfig, ApiKey};
//! use shipstation_api::models::{Label, Shipment};
//! use shipstation_api::pagination::PaginationOptions;
//!
//! let client = ShipStationClient::new(&config)?;
//!
//! // One page
//! let page = client.list::<Label>(PaginationOptions::page(2, 100)).await?;
//! if page.has_next_page() {
//!     // fetch page 3...
//! }
//!
//! // Every page
//! let shipments: Vec<Shipment> = client.list_all().await?;
//! ```
//!
//! ## Actions
//!
//! ```rust,ignore
//! client.cancel_shipment("se-28529731").await?;
//! client.void_label("se-799373193").await?;
//! client.process_batch("se-1013790").await?;
//!
//! let rates = client
//!     .calculate_rates(&serde_json::json!({
//!         "shipment_id": "se-28529731",
//!         "rate_options": {"carrier_ids": ["se-123890"]}
//!     }))
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]. Transport failures arrive as
//! [`ApiError::Http`] carrying ShipStation's own message when it sent one,
//! or a description of the status code otherwise.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Client and configuration types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Sequential**: One request in flight at a time; no retries

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod execution;
pub mod models;
pub mod pagination;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::{ListPage, ShipStationClient};
pub use config::{ApiKey, BaseUrl, ShipStationConfig, ShipStationConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RateLimit, Transport,
};

// Re-export operation types
pub use execution::{
    execute_operation, execute_rows, ExecutionError, ExecutionOptions, ListOptions,
    OperationRequest, OutputItem,
};
pub use resources::{ApiError, Endpoint, Operation, ResourceKind};
