//! Quote Engine
//!
//! Computes the normalized monthly cost of a subscription plan:
//!
//! ```text
//! For each request:
//! 1. Coerce plan price and delivery frequency to finite numbers
//! 2. Derive shipments per month (4 / frequency weeks, floored at 0)
//! 3. Aggregate the add-on total over the selected add-ons
//! 4. monthly cost = shipments per month x (plan price + add-on total)
//! 5. Degrade a non-finite result to 0
//! ```
//!
//! Requests arrive in two conventions: positional loose values, or a
//! configuration object whose recognized fields carry fallback chains
//! (`planPrice`/`basePrice`/`price`/`cost`, and so on). Both funnel into
//! [`CostRequest`], so the arithmetic lives in one place.
//!
//! # Example
//!
//! ```rust
//! use subscription_pricing_core_rs::quote::CostRequest;
//! use serde_json::json;
//!
//! let request = CostRequest::from_options(&json!({
//!     "planPrice": 50,
//!     "frequencyWeeks": 2,
//!     "selectedAddOns": {"cooler": true, "organic": false},
//!     "addOnPricing": {"cooler": 15, "organic": 5},
//! }));
//!
//! assert_eq!(request.monthly_cost(), 130.0);
//! ```

use crate::addons::collect_total;
use crate::core::coerce::to_number;
use crate::models::price_table::PriceTable;
use serde_json::{Map, Value};

/// A month is normalized to four delivery weeks
const WEEKS_PER_MONTH: f64 = 4.0;

/// Recognized plan price fields, first present wins
const PLAN_PRICE_FIELDS: [&str; 4] = ["planPrice", "basePrice", "price", "cost"];

/// Recognized frequency fields, first present wins
const FREQUENCY_FIELDS: [&str; 3] = ["frequencyWeeks", "frequency", "intervalWeeks"];

/// Recognized add-on collection fields, first present wins
const ADD_ON_FIELDS: [&str; 2] = ["selectedAddOns", "addOns"];

/// Recognized price table fields, first present wins
const PRICING_FIELDS: [&str; 2] = ["addOnPricing", "addOnPrices"];

/// One fully-assembled pricing request
///
/// Price and frequency stay loose (`Value`) until the quote is computed, so
/// numeric text and malformed data flow through the same coercion rules in
/// every convention.
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::{CostRequest, PriceTable};
/// use serde_json::json;
///
/// let request = CostRequest {
///     plan_price: json!(100),
///     frequency_weeks: json!(1),
///     add_ons: json!(null),
///     pricing: PriceTable::new(),
/// };
/// assert_eq!(request.monthly_cost(), 400.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostRequest {
    /// Base plan price per shipment (loose value)
    pub plan_price: Value,

    /// Delivery interval in weeks (loose value)
    pub frequency_weeks: Value,

    /// Selected add-on collection; `null` means none
    pub add_ons: Value,

    /// Price table for key-referenced add-ons
    pub pricing: PriceTable,
}

impl CostRequest {
    /// Build a request from a configuration object
    ///
    /// Recognized fields and their fallback chains:
    /// - plan price: `planPrice`, `basePrice`, `price`, `cost`
    /// - frequency: `frequencyWeeks`, `frequency`, `intervalWeeks`
    /// - add-ons: `selectedAddOns`, `addOns`
    /// - price table: `addOnPricing`, `addOnPrices`
    ///
    /// A field holding JSON `null` counts as absent. A non-object `options`
    /// value is treated as a bare plan price, matching the positional
    /// convention.
    pub fn from_options(options: &Value) -> Self {
        Self::from_options_with_frequency(options, &Value::Null)
    }

    /// Build a request from a configuration object with a fallback frequency
    ///
    /// The fallback applies only when none of the object's frequency fields
    /// are present.
    pub fn from_options_with_frequency(options: &Value, fallback_frequency: &Value) -> Self {
        let Some(entries) = options.as_object() else {
            return Self {
                plan_price: options.clone(),
                frequency_weeks: fallback_frequency.clone(),
                ..Self::default()
            };
        };

        let plan_price = first_present(entries, &PLAN_PRICE_FIELDS)
            .cloned()
            .unwrap_or(Value::Null);
        let frequency_weeks = first_present(entries, &FREQUENCY_FIELDS)
            .cloned()
            .unwrap_or_else(|| fallback_frequency.clone());
        let add_ons = first_present(entries, &ADD_ON_FIELDS)
            .cloned()
            .unwrap_or(Value::Null);
        let pricing = first_present(entries, &PRICING_FIELDS)
            .map(PriceTable::from_value)
            .unwrap_or_default();

        Self {
            plan_price,
            frequency_weeks,
            add_ons,
            pricing,
        }
    }

    /// Compute the full quote breakdown for this request
    pub fn quote(&self) -> MonthlyQuote {
        let plan_price = to_number(&self.plan_price);
        let frequency_weeks = to_number(&self.frequency_weeks);

        let shipments_per_month = shipments_per_month(frequency_weeks);
        let add_on_total = collect_total(&self.add_ons, &self.pricing);
        let price_per_shipment = plan_price + add_on_total;

        let monthly = shipments_per_month * price_per_shipment;
        let monthly_cost = if monthly.is_finite() { monthly } else { 0.0 };

        MonthlyQuote {
            shipments_per_month,
            add_on_total,
            price_per_shipment,
            monthly_cost,
        }
    }

    /// Compute just the monthly cost figure
    pub fn monthly_cost(&self) -> f64 {
        self.quote().monthly_cost
    }
}

/// Quote breakdown for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyQuote {
    /// Deliveries per normalized month (4 / frequency weeks, never negative)
    pub shipments_per_month: f64,

    /// Aggregated add-on contribution per shipment
    pub add_on_total: f64,

    /// Plan price plus add-on total, per shipment
    pub price_per_shipment: f64,

    /// Final monthly figure (0 when the computation is not finite)
    pub monthly_cost: f64,
}

/// Deliveries per normalized month for a given frequency in weeks
///
/// Non-positive frequencies yield 0 shipments. The quotient is floored at 0
/// so the shipment count is never negative.
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::shipments_per_month;
///
/// assert_eq!(shipments_per_month(1.0), 4.0);
/// assert_eq!(shipments_per_month(6.0), 4.0 / 6.0);
/// assert_eq!(shipments_per_month(0.0), 0.0);
/// assert_eq!(shipments_per_month(-2.0), 0.0);
/// ```
pub fn shipments_per_month(frequency_weeks: f64) -> f64 {
    if frequency_weeks > 0.0 {
        (WEEKS_PER_MONTH / frequency_weeks).max(0.0)
    } else {
        0.0
    }
}

/// Monthly cost for positional loose arguments
///
/// The positional twin of [`CostRequest::from_options`]: plan price and
/// frequency in weeks, then the add-on collection (`null` for none) and the
/// price table.
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::{calculate_monthly_cost, PriceTable};
/// use serde_json::json;
///
/// let cost = calculate_monthly_cost(&json!(100), &json!(1), &json!(null), &PriceTable::new());
/// assert_eq!(cost, 400.0);
/// ```
pub fn calculate_monthly_cost(
    plan_price: &Value,
    frequency_weeks: &Value,
    add_ons: &Value,
    pricing: &PriceTable,
) -> f64 {
    CostRequest {
        plan_price: plan_price.clone(),
        frequency_weeks: frequency_weeks.clone(),
        add_ons: add_ons.clone(),
        pricing: pricing.clone(),
    }
    .monthly_cost()
}

/// First recognized field that is present and non-null
fn first_present<'a>(entries: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|field| entries.get(*field))
        .find(|value| !value.is_null())
}
