//! Product resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Dimensions, Money, Weight};
use super::Resource;
use crate::resources::ResourceKind;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// The SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,

    /// The unit weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// The unit dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Whether the product is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// The category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,

    /// The product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Where the product sits in the warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,

    /// The customs description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_description: Option<String>,

    /// The declared customs value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_value: Option<Money>,

    /// The two-letter country of origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_country_of_origin: Option<String>,

    /// The harmonized tariff code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_harmonized_tariff_code: Option<String>,

    /// When the product was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Resource for Product {
    const KIND: ResourceKind = ResourceKind::Product;
}
