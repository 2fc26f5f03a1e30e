//! Normalization of listing bodies into a flat item sequence.
//!
//! ShipStation listings come back in a handful of shapes: a bare array, an
//! object nesting the items under the resource's collection field (plus
//! paging fields), an object with some other array field, or a single
//! object. [`ListShape::classify`] names the shape once so callers never
//! probe keys themselves.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use shipstation_api::pagination::{extract_items, ListShape};
//!
//! let body = json!({"shipments": [{"shipment_id": "se-1"}], "page": 1, "pages": 1});
//! assert!(matches!(ListShape::classify(&body), ListShape::Collection { field: "shipments", .. }));
//! assert_eq!(extract_items(&body), vec![json!({"shipment_id": "se-1"})]);
//! ```

use serde_json::Value;

use crate::resources::ResourceKind;

/// The shape of a listing body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListShape<'a> {
    /// Nothing usable: `null` or a scalar.
    Empty,
    /// A bare JSON array.
    Bare(&'a [Value]),
    /// An object with items under a known collection field.
    Collection {
        /// The collection field that matched.
        field: &'static str,
        /// Its value, an array or a single item.
        value: &'a Value,
    },
    /// An object whose first array-valued field holds the items.
    ArrayField {
        /// The name of that field.
        field: &'a str,
        /// The items.
        items: &'a [Value],
    },
    /// An object that is itself the only item.
    Single(&'a Value),
}

impl<'a> ListShape<'a> {
    /// Classifies a listing body.
    ///
    /// Known collection fields are probed in [`ResourceKind::ALL`] order and
    /// the first one holding a truthy value wins. Failing that, the first
    /// array-valued field in document order is used.
    #[must_use]
    pub fn classify(body: &'a Value) -> Self {
        match body {
            Value::Array(items) => Self::Bare(items),
            Value::Object(map) => {
                let known = ResourceKind::ALL.iter().find_map(|kind| {
                    let field = kind.collection_field();
                    map.get(field)
                        .filter(|value| is_truthy(value))
                        .map(|value| Self::Collection { field, value })
                });
                if let Some(shape) = known {
                    return shape;
                }

                map.iter()
                    .find_map(|(field, value)| {
                        value.as_array().map(|items| Self::ArrayField {
                            field: field.as_str(),
                            items,
                        })
                    })
                    .unwrap_or(Self::Single(body))
            }
            _ => Self::Empty,
        }
    }

    /// Returns the items this shape holds.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Empty => Vec::new(),
            Self::Bare(items) | Self::ArrayField { items, .. } => items.to_vec(),
            Self::Collection { value, .. } => match value {
                Value::Array(items) => items.clone(),
                other => vec![other.clone()],
            },
            Self::Single(value) => vec![value.clone()],
        }
    }
}

/// Flattens a listing body into its items.
///
/// Never fails; bodies with no recognizable items yield an empty vector.
#[must_use]
pub fn extract_items(body: &Value) -> Vec<Value> {
    ListShape::classify(body).into_items()
}

/// JSON truthiness: `null`, `false`, zero and `""` are falsy. Empty arrays
/// and objects are truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
