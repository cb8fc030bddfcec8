//! Add-On Module
//!
//! Resolves loosely-shaped add-on descriptors into numeric price
//! contributions and aggregates whole collections into a single total.
//!
//! # Accepted Descriptor Shapes
//!
//! - Bare number: a direct price
//! - Bare text: a price table key, implicitly enabled
//! - Structured record: either a numeric `price`/`cost`/`amount`/`value`
//!   override, or a `key`/`id` plus an `enabled`/`selected`/`active` flag
//!
//! # Critical Invariants
//!
//! 1. **Fixed precedence**: when a record ambiguously carries several
//!    price-bearing fields or several flags, the first in the documented
//!    order wins
//! 2. **Total tolerance**: an unresolvable descriptor contributes exactly 0;
//!    resolution never raises
//!
//! # Example
//!
//! ```rust
//! use subscription_pricing_core_rs::{collect_total, PriceTable};
//! use serde_json::json;
//!
//! let pricing = PriceTable::from_value(&json!({"cooler": 15, "dessert": "12.5"}));
//! let selection = json!(["dessert", {"key": "cooler", "enabled": true}, 2.5]);
//!
//! assert_eq!(collect_total(&selection, &pricing), 30.0);
//! ```

pub mod descriptor;
pub mod resolver;

// Re-export public API
pub use descriptor::AddOnDescriptor;
pub use resolver::{collect_total, resolve_price, resolve_value};
