//! Label resource. Labels support list, get, create and void.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Money;
use super::Resource;
use crate::resources::ResourceKind;

/// The processing status of a label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelStatus {
    /// Being generated.
    Processing,
    /// Waiting to be generated.
    Pending,
    /// Ready to print.
    Completed,
    /// Generation failed.
    Error,
    /// Voided or cancelled.
    Cancelled,
    /// A status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// The file format of a label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// PDF document.
    Pdf,
    /// PNG image.
    Png,
    /// Zebra printer language.
    Zpl,
}

/// Download URLs for a label, one per format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LabelDownload {
    /// PDF download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,

    /// PNG download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,

    /// ZPL download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zpl: Option<String>,
}

/// A shipping label.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Label {
    /// The label id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<String>,

    /// The shipment this label ships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,

    /// The carrier tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// The processing status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LabelStatus>,

    /// The carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    /// The carrier service code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// The file format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<LabelFormat>,

    /// The label size, e.g. `4x6`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_size: Option<String>,

    /// Download URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_download: Option<LabelDownload>,

    /// The carrier's tracking status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_status: Option<String>,

    /// What the label cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Money>,

    /// When the label was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the label was voided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voided_at: Option<DateTime<Utc>>,
}

impl Resource for Label {
    const KIND: ResourceKind = ResourceKind::Label;
}
