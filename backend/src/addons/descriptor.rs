// Add-on descriptor shapes
//
// Callers describe a selected add-on in several loose shapes: a bare price,
// a bare key, or a structured record. Normalization folds every accepted
// shape into one canonical form before any price lookup happens, so the
// resolution rules live in exactly one place.

use crate::core::coerce::to_number;
use serde_json::{Map, Value};

/// Price-bearing record fields, tried in this order. The first field whose
/// value is JSON-number-typed wins; a numeric string here does NOT count.
const PRICE_FIELDS: [&str; 4] = ["price", "cost", "amount", "value"];

/// Enabled-flag record fields, tried in this order. The first field whose
/// value is boolean-typed wins, even when it is `false`.
const FLAG_FIELDS: [&str; 3] = ["enabled", "selected", "active"];

/// Canonical form of one add-on descriptor
///
/// Every accepted input shape normalizes to one of these variants:
///
/// - `Direct`: the descriptor carried its own price (a bare number, or a
///   record with a numeric `price`/`cost`/`amount`/`value` field)
/// - `Keyed`: the descriptor references the price table by key; the price
///   applies only while `enabled` is true
/// - `Unpriced`: nothing priceable could be read; contributes 0
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::AddOnDescriptor;
/// use serde_json::json;
///
/// let direct = AddOnDescriptor::from_value(&json!(4.5));
/// assert_eq!(direct, AddOnDescriptor::Direct(4.5));
///
/// let keyed = AddOnDescriptor::from_value(&json!({"key": "cooler", "enabled": true}));
/// assert_eq!(keyed, AddOnDescriptor::Keyed { key: "cooler".to_string(), enabled: true });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AddOnDescriptor {
    /// Descriptor supplied its own price directly
    Direct(f64),

    /// Descriptor references the price table by key
    Keyed {
        /// Price table key
        key: String,
        /// Whether the add-on is switched on (false resolves to 0)
        enabled: bool,
    },

    /// Descriptor carried nothing priceable
    Unpriced,
}

impl AddOnDescriptor {
    /// Normalize any accepted loose shape into the canonical form
    ///
    /// - A bare number is a direct price.
    /// - Bare text is a table key, implicitly enabled.
    /// - A record is searched for a numeric price-bearing field first, then
    ///   for a `key`/`id` plus an `enabled`/`selected`/`active` flag.
    /// - Everything else is unpriced.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(_) => AddOnDescriptor::Direct(to_number(value)),
            Value::String(key) => AddOnDescriptor::Keyed {
                key: key.clone(),
                enabled: true,
            },
            Value::Object(record) => Self::from_record(record),
            _ => AddOnDescriptor::Unpriced,
        }
    }

    /// Normalize a structured record
    ///
    /// Field precedence is fixed: a numeric `price` beats `cost` beats
    /// `amount` beats `value`; a boolean `enabled` beats `selected` beats
    /// `active`. A record key must be non-empty text (`key` first, `id`
    /// second) for the table-lookup form.
    fn from_record(record: &Map<String, Value>) -> Self {
        for field in PRICE_FIELDS {
            if let Some(value) = record.get(field) {
                if value.is_number() {
                    return AddOnDescriptor::Direct(to_number(value));
                }
            }
        }

        let key = record
            .get("key")
            .and_then(Value::as_str)
            .or_else(|| record.get("id").and_then(Value::as_str))
            .filter(|key| !key.is_empty());

        let enabled = FLAG_FIELDS
            .iter()
            .find_map(|field| record.get(*field).and_then(Value::as_bool))
            .unwrap_or(false);

        match key {
            Some(key) => AddOnDescriptor::Keyed {
                key: key.to_string(),
                enabled,
            },
            None => AddOnDescriptor::Unpriced,
        }
    }
}
