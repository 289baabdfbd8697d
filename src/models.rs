//! Product record types and wire-format deserialization.
//!
//! The catalog endpoint is loose about types: ids arrive as strings or
//! integers, and description/price/images/category may be null or missing.
//! Everything is normalized here so the rest of the crate works with plain
//! owned values.

use serde::{Deserialize, Deserializer};

/// A product category as returned by the catalog endpoint.
///
/// Extra wire fields (id, image, ...) are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
}

/// One product entity displayed as a table row.
///
/// Immutable once received; owned by the controller for the lifetime of one
/// fetch cycle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    /// Product id, normalized to a string (wire: string or integer)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Product title, used for search and sorting
    pub title: String,
    /// Free-form description; None when missing or null
    #[serde(default)]
    pub description: Option<String>,
    /// Price; missing or null is treated as 0
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub price: f64,
    /// Category; None when missing or null
    #[serde(default)]
    pub category: Option<Category>,
    /// Image URLs in display order; empty when missing or null
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub images: Vec<String>,
}

impl Product {
    /// Category name for display, `"N/A"` when the product has none.
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("N/A")
    }
}

/// Helper to deserialize id as either string or integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize a nullable number as 0.0
fn deserialize_nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|opt| opt.unwrap_or(0.0))
}

/// Helper to deserialize a nullable array as an empty Vec
fn deserialize_nullable_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
