//! Carrier accounts connected to ShipStation. Read-only: list and get.

use serde::{Deserialize, Serialize};

use super::common::{Dimensions, Money};
use super::Resource;
use crate::resources::ResourceKind;

/// A service offered by a carrier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CarrierService {
    /// The service id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The service code, e.g. `usps_priority_mail`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Whether the service ships internationally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international: Option<bool>,

    /// Whether the service supports multi-package shipments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_package: Option<bool>,

    /// Whether dimensions are required for rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_required: Option<bool>,
}

/// A package type offered by a carrier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CarrierPackage {
    /// The package id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The package code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Fixed dimensions, for carrier-provided packaging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

/// An option a carrier accepts on shipments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CarrierOption {
    /// The option id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The option code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// What the option does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A connected carrier account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Carrier {
    /// The carrier id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    /// The carrier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The name shown in the ShipStation UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// The account number with the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Whether postage must be prepaid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_funded_account: Option<bool>,

    /// The prepaid balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,

    /// A user-chosen nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// The shipping provider id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_provider_id: Option<String>,

    /// Whether any service supports multiple packages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_multi_package_supporting_services: Option<bool>,

    /// Whether label messages are supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_label_messages: Option<bool>,

    /// Available services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<CarrierService>>,

    /// Available package types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<CarrierPackage>>,

    /// Available shipment options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CarrierOption>>,
}

impl Resource for Carrier {
    const KIND: ResourceKind = ResourceKind::Carrier;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_carrier_with_services() {
        let carrier: Carrier = serde_json::from_value(json!({
            "carrier_id": "se-123890",
            "friendly_name": "Stamps.com",
            "balance": {"amount": 100.0, "currency": "usd"},
            "services": [
                {"service_id": "1", "code": "usps_first_class_mail", "international": false},
                {"service_id": "2", "code": "usps_priority_mail_international", "international": true}
            ]
        }))
        .unwrap();

        let services = carrier.services.unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[1].international, Some(true));
        assert!(carrier.packages.is_none());
    }
}
