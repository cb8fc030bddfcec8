//! Quote Module - monthly cost calculation
//!
//! Top-level entry points for pricing a subscription plan. Accepts the
//! positional convention (`calculate_monthly_cost`) and the
//! configuration-object convention (`CostRequest::from_options`).
//!
//! See `engine.rs` for the full computation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{calculate_monthly_cost, shipments_per_month, CostRequest, MonthlyQuote};
