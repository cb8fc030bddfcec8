// Add-on price resolution and aggregation
//
// Resolution turns one canonical descriptor plus a price table into a
// numeric contribution. Aggregation folds a whole collection (sequence or
// mapping) into a single total. Both degrade malformed members to 0 and
// never raise.

use crate::addons::descriptor::AddOnDescriptor;
use crate::core::coerce::to_number;
use crate::models::price_table::PriceTable;
use serde_json::{Map, Value};

/// Resolve one canonical descriptor against the price table
///
/// - `Direct` returns its own price.
/// - `Keyed` looks the key up in the table, but only while enabled.
/// - `Unpriced` (and a disabled `Keyed`) contribute 0.
pub fn resolve_price(descriptor: &AddOnDescriptor, pricing: &PriceTable) -> f64 {
    match descriptor {
        AddOnDescriptor::Direct(price) => *price,
        AddOnDescriptor::Keyed { key, enabled } => {
            if *enabled {
                pricing.price_for(key)
            } else {
                0.0
            }
        }
        AddOnDescriptor::Unpriced => 0.0,
    }
}

/// Normalize a loose descriptor value and resolve it in one step
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::{resolve_value, PriceTable};
/// use serde_json::json;
///
/// let pricing = PriceTable::from_value(&json!({"cooler": 15}));
/// assert_eq!(resolve_value(&json!("cooler"), &pricing), 15.0);
/// assert_eq!(resolve_value(&json!(4.5), &pricing), 4.5);
/// assert_eq!(resolve_value(&json!(null), &pricing), 0.0);
/// ```
pub fn resolve_value(value: &Value, pricing: &PriceTable) -> f64 {
    resolve_price(&AddOnDescriptor::from_value(value), pricing)
}

/// Sum the resolved price of every member of an add-on collection
///
/// Accepted collection shapes:
/// - `null`: no add-ons, total 0
/// - sequence: each element is a descriptor in any accepted shape
/// - mapping: each entry is keyed by add-on key; a boolean includes the
///   table price (true) or nothing (false), a number is a direct override,
///   and a record is merged with its key into a structured descriptor
///
/// Any other collection shape, and any member that resolves to nothing,
/// contributes 0.
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::{collect_total, PriceTable};
/// use serde_json::json;
///
/// let pricing = PriceTable::from_value(&json!({"cooler": 15, "organic": 5}));
/// let selection = json!({"cooler": true, "organic": false});
/// assert_eq!(collect_total(&selection, &pricing), 15.0);
/// ```
pub fn collect_total(selection: &Value, pricing: &PriceTable) -> f64 {
    match selection {
        Value::Null => 0.0,
        Value::Array(items) => items.iter().map(|item| resolve_value(item, pricing)).sum(),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| entry_price(key, value, pricing))
            .sum(),
        _ => 0.0,
    }
}

/// Contribution of one mapping entry
fn entry_price(key: &str, value: &Value, pricing: &PriceTable) -> f64 {
    match value {
        Value::Bool(true) => pricing.price_for(key),
        Value::Bool(false) => 0.0,
        Value::Number(_) => to_number(value),
        Value::Object(record) => resolve_value(&merge_key(key, record), pricing),
        _ => 0.0,
    }
}

/// Merge a mapping key into a nested record to form a structured descriptor
///
/// The record's own `key` field, when present, wins over the mapping key.
fn merge_key(key: &str, record: &Map<String, Value>) -> Value {
    let mut merged = Map::with_capacity(record.len() + 1);
    merged.insert("key".to_string(), Value::String(key.to_string()));
    for (field, value) in record {
        merged.insert(field.clone(), value.clone());
    }
    Value::Object(merged)
}
