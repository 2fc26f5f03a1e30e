//! Rate calculation.
//!
//! Rates are never listed; they are calculated by posting a shipment
//! description to `/v2/rates`, which answers with a [`RateResponse`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Address;
use super::Resource;
use crate::resources::ResourceKind;

/// The cost breakdown of a rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RateDetails {
    /// The currency of every amount below.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// The total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_charges: Option<f64>,

    /// The base service charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_service_charge: Option<f64>,

    /// The fuel surcharge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_fuel_surcharge: Option<f64>,

    /// The insurance charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_insurance_charge: Option<f64>,

    /// The carrier's base charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_base_charge: Option<f64>,

    /// Miscellaneous charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_misc_charge: Option<f64>,

    /// Other charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_other_charge: Option<f64>,
}

/// One quoted rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Rate {
    /// The rate id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_id: Option<String>,

    /// The carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    /// The carrier service code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// The package type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,

    /// `check` or `shipment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_type: Option<String>,

    /// The estimated delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date: Option<DateTime<Utc>>,

    /// Estimated days in transit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<u32>,

    /// The cost breakdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_details: Option<RateDetails>,

    /// Carrier messages explaining why the rate may be unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_messages: Option<Vec<String>>,
}

impl Resource for Rate {
    const KIND: ResourceKind = ResourceKind::Rate;
}

/// The answer to a rate calculation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RateResponse {
    /// The quoted rates.
    #[serde(default)]
    pub rates: Vec<Rate>,

    /// Addresses the carriers rejected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_addresses: Vec<Address>,

    /// The rate request id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_request_id: Option<String>,

    /// The shipment that was rated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,

    /// When the rates were calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// `working`, `completed`, `partial` or `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Errors reported by carriers, kept verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Value>,
}
