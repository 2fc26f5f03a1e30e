//! Inventory levels.
//!
//! Inventory is listed with a single `limit` parameter rather than pages,
//! and levels are updated by posting to the collection.

use serde::{Deserialize, Serialize};

use super::common::Money;
use super::Resource;
use crate::resources::ResourceKind;

/// Stock of one SKU at one location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InventoryLevel {
    /// The SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Units physically on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hand: Option<i64>,

    /// Units allocated to open orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated: Option<i64>,

    /// Units available to sell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,

    /// Average unit cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<Money>,

    /// The inventory warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warehouse_id: Option<String>,

    /// The location within the warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_location_id: Option<String>,
}

impl Resource for InventoryLevel {
    const KIND: ResourceKind = ResourceKind::Inventory;
}
