//! Price table model
//!
//! Maps an add-on key to its per-shipment price. Prices are stored loose
//! (number or numeric text) and coerced on lookup, so a table deserialized
//! from caller-supplied JSON never needs cleaning first.

use crate::core::coerce::to_number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lookup table of add-on key to price
///
/// Backed by a JSON object so values tolerate both numeric and numeric-text
/// shapes. Missing keys resolve to 0, as does any value that cannot be
/// coerced to a finite number.
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::PriceTable;
/// use serde_json::json;
///
/// let pricing = PriceTable::from_value(&json!({"cooler": 15, "dessert": "12.5"}));
/// assert_eq!(pricing.price_for("cooler"), 15.0);
/// assert_eq!(pricing.price_for("dessert"), 12.5);
/// assert_eq!(pricing.price_for("unknown"), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable(Map<String, Value>);

impl PriceTable {
    /// Create an empty price table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a loose value
    ///
    /// Anything other than a JSON object yields an empty table, so a caller
    /// passing garbage pricing data gets zero prices rather than an error.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(entries) => Self(entries.clone()),
            _ => Self::default(),
        }
    }

    /// Insert or replace the price for a key
    pub fn insert(&mut self, key: &str, price: Value) {
        self.0.insert(key.to_string(), price);
    }

    /// Coerced price for a key (missing key resolves to 0)
    pub fn price_for(&self, key: &str) -> f64 {
        self.0.get(key).map(to_number).unwrap_or(0.0)
    }

    /// Raw stored value for a key, if present
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for PriceTable {
    fn from(entries: Map<String, Value>) -> Self {
        Self(entries)
    }
}
