//! The closed set of ShipStation resources and their static properties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resources::{ApiError, Operation};

/// How a resource's listing endpoint paginates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaginationStyle {
    /// `page` / `page_size` query parameters; the body reports `page` and `pages`.
    PageBased,
    /// Only a `limit` parameter is accepted and there is no page loop.
    LimitOnly,
}

/// A ShipStation domain entity mapped to a REST collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Shipments (`/v2/shipments`).
    Shipment,
    /// Labels (`/v2/labels`).
    Label,
    /// Inventory levels (`/v2/inventory`).
    Inventory,
    /// Products (`/v2/products`).
    Product,
    /// Rates (`/v2/rates`).
    Rate,
    /// Batches (`/v2/batches`).
    Batch,
    /// Carriers (`/v2/carriers`).
    Carrier,
    /// Warehouses (`/v2/warehouses`).
    Warehouse,
    /// Tags (`/v2/tags`).
    Tag,
}

struct ResourceSpec {
    name: &'static str,
    display_name: &'static str,
    segment: &'static str,
    collection_field: &'static str,
    pagination: PaginationStyle,
    operations: &'static [Operation],
}

use Operation::{Calculate, Cancel, Create, Delete, Get, List, Process, Update, Void};

// Indexed by `ResourceKind as usize`; order is also the collection probe order.
static RESOURCES: [ResourceSpec; 9] = [
    ResourceSpec {
        name: "shipment",
        display_name: "Shipment",
        segment: "shipments",
        collection_field: "shipments",
        pagination: PaginationStyle::PageBased,
        operations: &[Cancel, Create, Get, List, Update],
    },
    ResourceSpec {
        name: "label",
        display_name: "Label",
        segment: "labels",
        collection_field: "labels",
        pagination: PaginationStyle::PageBased,
        operations: &[Create, Get, List, Void],
    },
    ResourceSpec {
        name: "inventory",
        display_name: "Inventory",
        segment: "inventory",
        collection_field: "inventory",
        pagination: PaginationStyle::LimitOnly,
        operations: &[List, Update],
    },
    ResourceSpec {
        name: "product",
        display_name: "Product",
        segment: "products",
        collection_field: "products",
        pagination: PaginationStyle::PageBased,
        operations: &[Create, Delete, Get, List, Update],
    },
    ResourceSpec {
        name: "rate",
        display_name: "Rate",
        segment: "rates",
        collection_field: "rates",
        pagination: PaginationStyle::PageBased,
        operations: &[Calculate],
    },
    ResourceSpec {
        name: "batch",
        display_name: "Batch",
        segment: "batches",
        collection_field: "batches",
        pagination: PaginationStyle::PageBased,
        operations: &[Create, Get, List, Process],
    },
    ResourceSpec {
        name: "carrier",
        display_name: "Carrier",
        segment: "carriers",
        collection_field: "carriers",
        pagination: PaginationStyle::PageBased,
        operations: &[Get, List],
    },
    ResourceSpec {
        name: "warehouse",
        display_name: "Warehouse",
        segment: "warehouses",
        collection_field: "warehouses",
        pagination: PaginationStyle::PageBased,
        operations: &[Create, Delete, Get, List, Update],
    },
    ResourceSpec {
        name: "tag",
        display_name: "Tag",
        segment: "tags",
        collection_field: "tags",
        pagination: PaginationStyle::PageBased,
        operations: &[Create, Delete, Get, List, Update],
    },
];

impl ResourceKind {
    /// Every resource kind, in collection probe order.
    pub const ALL: [Self; 9] = [
        Self::Shipment,
        Self::Label,
        Self::Inventory,
        Self::Product,
        Self::Rate,
        Self::Batch,
        Self::Carrier,
        Self::Warehouse,
        Self::Tag,
    ];

    fn spec(self) -> &'static ResourceSpec {
        &RESOURCES[self as usize]
    }

    /// Returns the parameter name used by callers (e.g. `"shipment"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Returns the human-readable name (e.g. `"Shipment"`).
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }

    /// Returns the URL path segment (e.g. `"shipments"`).
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        self.spec().segment
    }

    /// Returns the JSON key a listing nests its items under.
    #[must_use]
    pub fn collection_field(self) -> &'static str {
        self.spec().collection_field
    }

    /// Returns how the listing endpoint paginates.
    #[must_use]
    pub fn pagination(self) -> PaginationStyle {
        self.spec().pagination
    }

    /// Returns the operations this resource supports.
    #[must_use]
    pub fn operations(self) -> &'static [Operation] {
        self.spec().operations
    }

    /// Returns `true` if `operation` is available for this resource.
    #[must_use]
    pub fn supports(self, operation: Operation) -> bool {
        self.operations().contains(&operation)
    }

    /// Returns the collection path, e.g. `/v2/shipments`.
    #[must_use]
    pub fn collection_path(self) -> String {
        format!("/v2/{}", self.path_segment())
    }

    /// Looks a resource up by its parameter name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ApiError::UnknownResource {
            resource: s.to_string(),
        })
    }
}
