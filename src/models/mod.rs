//! Typed payloads for ShipStation resources.
//!
//! Every field is optional: ShipStation omits fields freely and the same
//! struct doubles as the create/update payload, where unset fields are
//! skipped on serialization.
//!
//! # Available Resources
//!
//! | Model | Kind | Operations |
//! |-------|------|------------|
//! | [`Shipment`] | shipment | list, get, create, update, cancel |
//! | [`Label`] | label | list, get, create, void |
//! | [`InventoryLevel`] | inventory | list, update |
//! | [`Product`] | product | list, get, create, update, delete |
//! | [`Rate`] | rate | calculate |
//! | [`Batch`] | batch | list, get, create, process |
//! | [`Carrier`] | carrier | list, get |
//! | [`Warehouse`] | warehouse | list, get, create, update, delete |
//! | [`Tag`] | tag | list, get, create, update, delete |

mod batch;
mod carrier;
mod common;
mod inventory;
mod label;
mod product;
mod rate;
mod shipment;
mod tag;
mod warehouse;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::resources::ResourceKind;

pub use batch::{Batch, BatchStatus};
pub use carrier::{Carrier, CarrierOption, CarrierPackage, CarrierService};
pub use common::{Address, Dimensions, Link, Money, Package, PaginationLinks, Weight};
pub use inventory::InventoryLevel;
pub use label::{Label, LabelDownload, LabelFormat, LabelStatus};
pub use product::Product;
pub use rate::{Rate, RateDetails, RateResponse};
pub use shipment::{AdvancedOptions, Insurance, Shipment, ShipmentStatus};
pub use tag::Tag;
pub use warehouse::Warehouse;

/// A model bound to the REST collection it is read from and written to.
pub trait Resource: Serialize + DeserializeOwned {
    /// The resource kind this model represents.
    const KIND: ResourceKind;
}
