//! Numeric coercion for loose pricing inputs
//!
//! Pricing data arrives as JSON-shaped values: numbers, numeric strings,
//! booleans, objects, nulls. Every quantity that feeds arithmetic goes
//! through this module first, so downstream code only ever sees finite f64s.
//!
//! CRITICAL: Coercion never fails. Anything that cannot be read as a finite
//! number becomes the fallback (0 unless the caller supplies one).

use serde_json::Value;

/// Coerce a loose value to a finite number, falling back to 0.
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::to_number;
/// use serde_json::json;
///
/// assert_eq!(to_number(&json!(12.5)), 12.5);
/// assert_eq!(to_number(&json!(" 12.5 ")), 12.5);
/// assert_eq!(to_number(&json!("not a price")), 0.0);
/// assert_eq!(to_number(&json!(null)), 0.0);
/// ```
pub fn to_number(value: &Value) -> f64 {
    to_number_or(value, 0.0)
}

/// Coerce a loose value to a finite number with an explicit fallback.
///
/// - Numbers pass through if finite.
/// - Strings are trimmed and parsed; empty text yields the fallback.
/// - Every other shape (null, bool, array, object) yields the fallback.
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::to_number_or;
/// use serde_json::json;
///
/// assert_eq!(to_number_or(&json!("3e2"), -1.0), 300.0);
/// assert_eq!(to_number_or(&json!(""), -1.0), -1.0);
/// assert_eq!(to_number_or(&json!(true), -1.0), -1.0);
/// ```
pub fn to_number_or(value: &Value, fallback: f64) -> f64 {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(parsed) if parsed.is_finite() => parsed,
            _ => fallback,
        },
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return fallback;
            }
            match trimmed.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => parsed,
                _ => fallback,
            }
        }
        _ => fallback,
    }
}
