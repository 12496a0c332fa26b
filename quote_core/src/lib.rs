//! # quote_core - Custom-Part Pricing & Weight Engine
//!
//! `quote_core` turns raw dimensional and material inputs for made-to-order
//! plastic parts into a weight estimate and a final quoted price. It is the
//! single source of truth shared by the storefront's live price preview and
//! the checkout handler, so both sides of the order agree to the cent.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions over an injected [`config::PricingConfig`]
//! - **Never fail a quote**: malformed input degrades to a floored result
//!   instead of erroring; validation is a separate, optional helper
//! - **JSON-First**: all boundary types implement Serialize/Deserialize
//! - **Deterministic**: identical input yields byte-identical price strings,
//!   safe to compare against a live cart
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::{calculate_price_and_weight, PricingConfig, QuoteRequest};
//!
//! let request = QuoteRequest {
//!     form_type: "Sheet".to_string(),
//!     thickness: "2".to_string(),
//!     density: 1.2,
//!     length_mm: Some(500.0),
//!     width_mm: Some(500.0),
//!     precision: "Normal (±2mm)".to_string(),
//!     quantity: 1,
//!     unit_price: 10.0,
//!     ..QuoteRequest::default()
//! };
//!
//! let quote = calculate_price_and_weight(&request, &PricingConfig::default());
//! assert_eq!(quote.price, "18.50");
//! assert_eq!(quote.weight, 0.6);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - one calculator per product shape
//! - [`fees`] - the shared cost policies (shipping, oversize, precision, machining)
//! - [`config`] - tier schedules and fee constants, injected
//! - [`request`] - the wire-format request bag and dispatch facade
//! - [`quote`] - result types with the itemized cost breakdown
//! - [`units`] - metric/imperial conversion for linked form fields
//! - [`materials`] - stock material database
//! - [`discounts`] - order-total discount codes (display layer)
//! - [`audit`] - reproducible quote records
//! - [`errors`] - structured boundary errors

pub mod audit;
pub mod calculations;
pub mod config;
pub mod discounts;
pub mod errors;
pub mod fees;
pub mod materials;
pub mod quote;
pub mod request;
pub mod units;

// Re-export the types most callers need at the crate root
pub use config::{PricingConfig, ShippingPolicy, UnknownShapeBehavior, DEFAULT_PRICING};
pub use errors::{QuoteError, QuoteResult};
pub use quote::{CostBreakdown, Quote};
pub use request::{calculate_price_and_weight, QuoteRequest};
