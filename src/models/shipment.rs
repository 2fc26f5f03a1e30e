//! Shipment resource.
//!
//! A shipment is the unit ShipStation rates, labels and tracks. Shipments
//! support list, get, create, update and cancel.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::models::Shipment;
//!
//! let shipment: Shipment = client.get("se-28529731").await?;
//! println!("{:?}", shipment.shipment_status);
//!
//! let cancelled = client.cancel_shipment("se-28529731").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, Money, Package, Weight};
use super::Resource;
use crate::resources::ResourceKind;

/// The lifecycle status of a shipment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Created but not yet labelled.
    #[default]
    Pending,
    /// Cancelled before shipping.
    Cancelled,
    /// Handed to the carrier.
    Shipped,
    /// Delivered to the recipient.
    Delivered,
    /// The carrier reported a problem.
    Exception,
    /// A status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Shipment insurance settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Insurance {
    /// The declared value to insure.
    pub insured_value: Money,

    /// Whether the shipment is insured.
    pub insure_shipment: bool,
}

/// Third-party billing options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AdvancedOptions {
    /// Who pays for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_party: Option<String>,

    /// The account billed when a third party pays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_account: Option<String>,

    /// The billed account's postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_postal_code: Option<String>,

    /// The billed account's country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_country_code: Option<String>,
}

/// A ShipStation shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shipment {
    /// The shipment id, e.g. `se-28529731`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,

    /// An id from an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_shipment_id: Option<String>,

    /// The carrier used to ship.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    /// The carrier service code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// The lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<ShipmentStatus>,

    /// The date the shipment is scheduled to ship.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime<Utc>>,

    /// The recipient address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<Address>,

    /// The origin address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_from: Option<Address>,

    /// Where returns go.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to: Option<Address>,

    /// The packages in the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<Package>>,

    /// The combined weight of all packages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<Weight>,

    /// The tracking number once labelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// The batch the shipment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,

    /// Tag names applied to the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Insurance settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Insurance>,

    /// Third-party billing options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<AdvancedOptions>,

    /// When the shipment was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the shipment was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Resource for Shipment {
    const KIND: ResourceKind = ResourceKind::Shipment;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shipment_deserialization() {
        let shipment: Shipment = serde_json::from_value(json!({
            "shipment_id": "se-28529731",
            "carrier_id": "se-123890",
            "service_id": "usps_priority_mail",
            "shipment_status": "pending",
            "ship_date": "2024-05-01T00:00:00Z",
            "created_at": "2024-04-30T18:09:13.470Z",
            "ship_to": {"name": "Amanda Miller", "city": "Austin", "country": "US"},
            "packages": [{"weight": {"value": 1.0, "unit": "ounce"}}],
            "tags": ["rush"],
            "unknown_field": true
        }))
        .unwrap();

        assert_eq!(shipment.shipment_id.as_deref(), Some("se-28529731"));
        assert_eq!(shipment.shipment_status, Some(ShipmentStatus::Pending));
        assert_eq!(shipment.ship_to.unwrap().city.as_deref(), Some("Austin"));
        assert_eq!(shipment.packages.unwrap().len(), 1);
        assert_eq!(shipment.tags, Some(vec!["rush".to_string()]));
        assert!(shipment.created_at.is_some());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let shipment: Shipment =
            serde_json::from_value(json!({"shipment_status": "label_purchased"})).unwrap();
        assert_eq!(shipment.shipment_status, Some(ShipmentStatus::Unknown));
    }

    #[test]
    fn test_create_payload_omits_unset_fields() {
        let shipment = Shipment {
            carrier_id: Some("se-123890".to_string()),
            service_id: Some("usps_priority_mail".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&shipment).unwrap();
        assert_eq!(
            value,
            json!({"carrier_id": "se-123890", "service_id": "usps_priority_mail"})
        );
    }
}
