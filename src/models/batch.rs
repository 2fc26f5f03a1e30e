//! Batch resource. Batches group shipments whose labels are generated
//! together by the process action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::resources::ResourceKind;

/// The lifecycle status of a batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Accepting shipments.
    Open,
    /// Waiting to be processed.
    Queued,
    /// Labels are being generated.
    Processing,
    /// Every label was generated.
    Completed,
    /// Processing finished with some failures.
    CompletedWithErrors,
    /// Archived.
    Archived,
    /// Cancelled before processing.
    Cancelled,
    /// A status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A batch of shipments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Batch {
    /// The batch id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,

    /// An id from an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_batch_id: Option<String>,

    /// The lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_status: Option<BatchStatus>,

    /// Where to download the error report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors_url: Option<String>,

    /// Where to download the combined labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_url: Option<String>,

    /// Where to download customs forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forms_url: Option<String>,

    /// Labels in the batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_count: Option<u32>,

    /// Shipments in the batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_count: Option<u32>,

    /// When the batch was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the batch was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

impl Resource for Batch {
    const KIND: ResourceKind = ResourceKind::Batch;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_status_snake_case() {
        let batch: Batch = serde_json::from_value(json!({
            "batch_id": "se-1",
            "batch_status": "completed_with_errors",
            "label_count": 9
        }))
        .unwrap();
        assert_eq!(batch.batch_status, Some(BatchStatus::CompletedWithErrors));
        assert_eq!(batch.label_count, Some(9));
    }
}
