//! Integration tests for the monthly cost calculator
//!
//! Tests cover:
//! - The positional and configuration-object conventions
//! - Field-precedence fallback chains on the configuration object
//! - Frequency normalization (non-positive, fractional, numeric text)
//! - Degradation to zero for malformed and non-finite inputs

use serde_json::json;
use subscription_pricing_core_rs::{
    calculate_monthly_cost, shipments_per_month, CostRequest, PriceTable,
};

/// Helper for approximate float comparison
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{} not within 1e-9 of {}",
        actual,
        expected
    );
}

#[test]
fn test_weekly_plan_bills_four_shipments_per_month() {
    let cost = calculate_monthly_cost(&json!(100), &json!(1), &json!(null), &PriceTable::new());
    assert_eq!(cost, 400.0);
}

#[test]
fn test_six_week_frequency_prorates() {
    let request = CostRequest::from_options(&json!({"planPrice": 120, "frequencyWeeks": 6}));
    assert_close(request.monthly_cost(), 80.0);
}

#[test]
fn test_boolean_mapping_with_pricing_table() {
    let request = CostRequest::from_options(&json!({
        "planPrice": 50,
        "frequencyWeeks": 2,
        "selectedAddOns": {"cooler": true, "organic": false},
        "addOnPricing": {"cooler": 15, "organic": 5},
    }));
    assert_eq!(request.monthly_cost(), 130.0);
}

#[test]
fn test_numeric_text_inputs_throughout() {
    let request = CostRequest::from_options(&json!({
        "planPrice": "75",
        "frequencyWeeks": "3",
        "selectedAddOns": ["dessert"],
        "addOnPricing": {"dessert": "12.5"},
    }));
    assert_close(request.monthly_cost(), (4.0 / 3.0) * 87.5);
}

#[test]
fn test_plan_price_fallback_chain() {
    // planPrice > basePrice > price > cost, first present wins
    let request = CostRequest::from_options(&json!({"cost": 40, "frequencyWeeks": 4}));
    assert_eq!(request.monthly_cost(), 40.0);

    let request = CostRequest::from_options(&json!({"cost": 40, "price": 80, "frequencyWeeks": 4}));
    assert_eq!(request.monthly_cost(), 80.0);

    let request = CostRequest::from_options(
        &json!({"cost": 40, "price": 80, "basePrice": 120, "frequencyWeeks": 4}),
    );
    assert_eq!(request.monthly_cost(), 120.0);
}

#[test]
fn test_frequency_fallback_chain() {
    let request = CostRequest::from_options(&json!({"planPrice": 100, "intervalWeeks": 2}));
    assert_eq!(request.monthly_cost(), 200.0);

    // frequencyWeeks wins over the other names
    let request = CostRequest::from_options(
        &json!({"planPrice": 100, "frequencyWeeks": 4, "intervalWeeks": 2}),
    );
    assert_eq!(request.monthly_cost(), 100.0);
}

#[test]
fn test_frequency_positional_fallback() {
    // the fallback frequency applies only when the object carries none
    let request = CostRequest::from_options_with_frequency(&json!({"planPrice": 100}), &json!(1));
    assert_eq!(request.monthly_cost(), 400.0);

    let request = CostRequest::from_options_with_frequency(
        &json!({"planPrice": 100, "frequency": 2}),
        &json!(1),
    );
    assert_eq!(request.monthly_cost(), 200.0);
}

#[test]
fn test_add_on_field_fallback_chain() {
    let request = CostRequest::from_options(&json!({
        "planPrice": 10,
        "frequencyWeeks": 4,
        "addOns": ["cooler"],
        "addOnPrices": {"cooler": 15},
    }));
    assert_eq!(request.monthly_cost(), 25.0);
}

#[test]
fn test_null_fields_count_as_absent() {
    let request = CostRequest::from_options(&json!({
        "planPrice": null,
        "basePrice": 120,
        "frequencyWeeks": null,
        "frequency": 6,
    }));
    assert_close(request.monthly_cost(), 80.0);
}

#[test]
fn test_zero_and_negative_frequency_yield_zero_cost() {
    let pricing = PriceTable::from_value(&json!({"cooler": 15}));
    let add_ons = json!({"cooler": true});

    let cost = calculate_monthly_cost(&json!(100), &json!(0), &add_ons, &pricing);
    assert_eq!(cost, 0.0);

    let cost = calculate_monthly_cost(&json!(100), &json!(-2), &add_ons, &pricing);
    assert_eq!(cost, 0.0);

    let cost = calculate_monthly_cost(&json!(100), &json!("garbage"), &add_ons, &pricing);
    assert_eq!(cost, 0.0);
}

#[test]
fn test_missing_everything_yields_zero() {
    let request = CostRequest::from_options(&json!({}));
    assert_eq!(request.monthly_cost(), 0.0);

    let request = CostRequest::default();
    assert_eq!(request.monthly_cost(), 0.0);
}

#[test]
fn test_add_ons_without_pricing_table() {
    // key-referenced add-ons resolve to 0 without a table; direct prices
    // still count
    let request = CostRequest::from_options(&json!({
        "planPrice": 10,
        "frequencyWeeks": 4,
        "selectedAddOns": ["cooler", 5],
    }));
    assert_eq!(request.monthly_cost(), 15.0);
}

#[test]
fn test_quote_breakdown_matches_scalar() {
    let request = CostRequest::from_options(&json!({
        "planPrice": 50,
        "frequencyWeeks": 2,
        "selectedAddOns": {"cooler": true},
        "addOnPricing": {"cooler": 15},
    }));

    let quote = request.quote();
    assert_eq!(quote.shipments_per_month, 2.0);
    assert_eq!(quote.add_on_total, 15.0);
    assert_eq!(quote.price_per_shipment, 65.0);
    assert_eq!(quote.monthly_cost, request.monthly_cost());
}

#[test]
fn test_shipments_per_month_boundaries() {
    assert_eq!(shipments_per_month(1.0), 4.0);
    assert_eq!(shipments_per_month(4.0), 1.0);
    assert_close(shipments_per_month(6.0), 4.0 / 6.0);
    assert_eq!(shipments_per_month(0.0), 0.0);
    assert_eq!(shipments_per_month(-1.0), 0.0);
    assert_eq!(shipments_per_month(f64::NAN), 0.0);
}

#[test]
fn test_idempotent_for_identical_inputs() {
    let request = CostRequest::from_options(&json!({
        "planPrice": "75",
        "frequencyWeeks": "3",
        "selectedAddOns": ["dessert"],
        "addOnPricing": {"dessert": "12.5"},
    }));

    assert_eq!(request.monthly_cost(), request.monthly_cost());
    assert_eq!(request.quote(), request.quote());
}
