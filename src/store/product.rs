//! Product record and request payload

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A product row as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, quantity: i32, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Body of a create or update request.
///
/// Every field is required. `quantity` must fit the `INT` column, and
/// `price` must be a JSON number that a decimal holds exactly. Any `id` in
/// the body is ignored; the store or the URL supplies it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub quantity: i32,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: Decimal,
}

/// Accept only JSON numbers, and only those that convert without rounding.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    parse_price(&number.to_string()).map_err(de::Error::custom)
}

fn parse_price(text: &str) -> Result<Decimal, String> {
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str_exact(text)
    };
    parsed.map_err(|e| format!("price {} is not representable as a decimal: {}", text, e))
}

impl ProductPayload {
    /// Decode a request body
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Attach an id, producing the full record
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
