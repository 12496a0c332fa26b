//! # Quote Types
//!
//! The engine's output: a display-ready price string, a rounded weight, and
//! the itemized cost terms behind them. The breakdown is part of the public
//! result because the checkout handler logs it alongside the created variant
//! for audit, and because each term has its own policy worth testing in
//! isolation.

use serde::{Deserialize, Serialize};

use crate::config::{PricingConfig, UnknownShapeBehavior};

/// Itemized non-negative cost terms, per unit. Summed and floored to
/// produce the quoted price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Part weight times the material's per-kg price
    pub material: f64,
    /// Tolerance-class surcharge (Sheet and Rod only)
    pub precision: f64,
    /// Amortized oversize-dimension surcharge
    pub oversize: f64,
    /// Shipping contribution for one unit
    pub shipping: f64,
    /// Amortized machining setup cost (gasket and disc)
    pub machining_base: f64,
    /// Bounding-square stock machining fee (gasket and disc)
    pub machining_material: f64,
}

impl CostBreakdown {
    /// Sum of all terms, before the price floor.
    pub fn total(&self) -> f64 {
        self.material
            + self.precision
            + self.oversize
            + self.shipping
            + self.machining_base
            + self.machining_material
    }
}

/// A finished quote: what the order form displays and the checkout handler
/// submits to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Final per-unit price, fixed to two decimals
    pub price: String,
    /// Part weight in kilograms, fixed to three decimals
    pub weight: f64,
    /// The terms the price was assembled from
    pub breakdown: CostBreakdown,
}

impl Quote {
    /// Assemble a quote from a floored weight and its cost terms, applying
    /// the price floor and the fixed-point output formats.
    pub fn from_breakdown(weight_kg: f64, breakdown: CostBreakdown, config: &PricingConfig) -> Self {
        let price = breakdown.total().max(config.min_price);
        Quote {
            price: format!("{:.2}", price),
            weight: round3(weight_kg),
            breakdown,
        }
    }

    /// The quote returned for an unrecognized form type.
    ///
    /// Under [`UnknownShapeBehavior::LegacyZero`] the price is `"0.00"` —
    /// below the floor every shape calculator enforces. The storefront has
    /// always behaved this way, so changing it is a configuration decision,
    /// not a bug fix.
    pub fn unknown_shape_fallback(config: &PricingConfig) -> Self {
        let price = match config.unknown_shape_behavior {
            UnknownShapeBehavior::LegacyZero => 0.0,
            UnknownShapeBehavior::Floored => config.min_price,
        };
        Quote {
            price: format!("{:.2}", price),
            weight: round3(config.min_weight_kg),
            breakdown: CostBreakdown::default(),
        }
    }

    /// The price as a number, for callers that aggregate totals.
    pub fn price_value(&self) -> f64 {
        self.price.parse().unwrap_or(0.0)
    }
}

/// Round to three decimal places, the weight resolution the carrier accepts.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
