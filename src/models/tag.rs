//! Tag resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::resources::ResourceKind;

/// A label that can be applied to shipments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tag {
    /// The tag id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,

    /// The tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The display colour, e.g. `#FF0000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// When the tag was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the tag was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Resource for Tag {
    const KIND: ResourceKind = ResourceKind::Tag;
}
