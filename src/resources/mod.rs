//! ShipStation resources, operations and endpoint resolution.
//!
//! The resource → path, pagination style and supported operations mapping
//! is a single static table keyed by the closed [`ResourceKind`] enum.
//!
//! # Key Types
//!
//! - [`ResourceKind`]: Shipment, label, inventory, product, rate, batch, carrier, warehouse, tag
//! - [`PaginationStyle`]: Page-based or limit-only listing
//! - [`Operation`]: What a caller wants to do with a resource
//! - [`Endpoint`]: The method, path and body kind a (resource, operation) pair resolves to
//! - [`ApiError`]: The error type returned by every operation in this crate

mod errors;
mod kind;
mod operation;

pub use errors::{validation_message, ApiError};
pub use kind::{PaginationStyle, ResourceKind};
pub use operation::{BodyKind, Endpoint, Operation};
