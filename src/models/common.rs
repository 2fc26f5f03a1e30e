//! Value types shared by several resources.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// All fields are optional to support partial address data.
///
/// # Example
///
/// ```rust
/// use shipstation_api::models::Address;
///
/// let address = Address {
///     name: Some("Jane Doe".to_string()),
///     street1: Some("4009 Marathon Blvd".to_string()),
///     city: Some("Austin".to_string()),
///     state: Some("TX".to_string()),
///     postal_code: Some("78756".to_string()),
///     country: Some("US".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// The name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The first street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,

    /// The second street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,

    /// The third street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A monetary amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Money {
    /// The amount.
    pub amount: f64,

    /// The three-letter ISO 4217 currency code, lowercase in ShipStation.
    pub currency: String,
}

/// A weight with its unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Weight {
    /// The weight value.
    pub value: f64,

    /// The unit: `pound`, `ounce`, `gram` or `kilogram`.
    pub unit: String,
}

/// Package dimensions with their unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Dimensions {
    /// The length.
    pub length: f64,

    /// The width.
    pub width: f64,

    /// The height.
    pub height: f64,

    /// The unit: `inch` or `centimeter`.
    pub unit: String,
}

/// A package in a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Package {
    /// The package weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// The package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

/// A hypermedia link.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Link {
    /// The absolute URL.
    pub href: String,
}

/// Navigation links returned with paged listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    /// The first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,

    /// The last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,

    /// The next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,

    /// The previous page, absent on the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_skips_missing_fields() {
        let address = Address {
            name: Some("Jane Doe".to_string()),
            country: Some("US".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(value, json!({"name": "Jane Doe", "country": "US"}));
    }

    #[test]
    fn test_package_deserialization() {
        let package: Package = serde_json::from_value(json!({
            "weight": {"value": 2.5, "unit": "pound"},
            "dimensions": {"length": 10, "width": 8, "height": 4, "unit": "inch"}
        }))
        .unwrap();

        let weight = package.weight.unwrap();
        assert!((weight.value - 2.5).abs() < f64::EPSILON);
        assert_eq!(weight.unit, "pound");
        assert_eq!(package.dimensions.unwrap().unit, "inch");
    }

    #[test]
    fn test_pagination_links_partial() {
        let links: PaginationLinks = serde_json::from_value(json!({
            "first": {"href": "https://api.shipstation.com/v2/tags?page=1"}
        }))
        .unwrap();
        assert!(links.first.is_some());
        assert!(links.next.is_none());
    }
}
