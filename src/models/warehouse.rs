//! Warehouse resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Address;
use super::Resource;
use crate::resources::ResourceKind;

/// A ship-from location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Warehouse {
    /// The warehouse id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,

    /// The warehouse name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The address shipments leave from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<Address>,

    /// The address returns go to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<Address>,

    /// Whether this is the account's default warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// When the warehouse was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Warehouse {
    const KIND: ResourceKind = ResourceKind::Warehouse;
}
