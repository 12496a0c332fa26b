//! # Pricing Configuration
//!
//! Every tier schedule and fee constant the engine consumes, gathered into a
//! single injected [`PricingConfig`]. `PricingConfig::default()` is the one
//! place the governing numbers are written down; nothing else in the crate
//! hard-codes a rate. Callers that don't need a custom schedule can use the
//! process-wide [`DEFAULT_PRICING`] static.
//!
//! ## Interval semantics
//!
//! Both schedules are ordered lists of half-open intervals `(min, max]`:
//! a value exactly on a boundary belongs to the lower tier (upper-inclusive).
//! The first interval starts at 0, which is inclusive in practice since all
//! weights and dimensions are non-negative; the last interval's `max` is
//! `f64::INFINITY`, making the table exhaustive.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One row of the shipping schedule: a half-open unit-weight interval
/// `(min_kg, max_kg]` mapped to a flat per-kilogram rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingTier {
    pub min_kg: f64,
    pub max_kg: f64,
    pub rate_per_kg: f64,
}

/// One row of the oversize schedule: a half-open dimension interval
/// `(min_mm, max_mm]` mapped to a flat fee for the whole order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OversizeTier {
    pub min_mm: f64,
    pub max_mm: f64,
    pub fee: f64,
}

/// Shipping cost strategy.
///
/// The schedule has existed in two forms: a stepped per-kg rate looked up
/// against the unit weight, and a single flat rate applied to the whole
/// batch and then amortized back per unit. Both are kept as named variants
/// so the governing policy is a configuration choice, not an edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShippingPolicy {
    /// Tiered per-kg rate against the unit weight (governing policy).
    Stepped,
    /// Flat per-kg rate applied to the batch weight, amortized per unit.
    FlatBatch { rate_per_kg: f64 },
}

/// What the dispatch facade returns for an unrecognized form type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownShapeBehavior {
    /// `{price: "0.00", weight: 0.001}` — the storefront's historical
    /// fallback, which bypasses the price floor the shape calculators
    /// enforce. Kept as the default so quotes match the live cart.
    LegacyZero,
    /// Clamp the fallback price to the same floor as every real shape.
    Floored,
}

/// Injected configuration for the whole pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Ordered, contiguous, exhaustive from 0 to +inf.
    pub shipping_tiers: Vec<ShippingTier>,
    /// Ordered, contiguous, exhaustive from 0 to +inf; first tier is free.
    pub oversize_tiers: Vec<OversizeTier>,
    pub shipping_policy: ShippingPolicy,
    /// Per-kg rate used if the shipping lookup falls through.
    pub fallback_shipping_rate: f64,
    /// Flat per-unit fee for Normal (±2mm) tolerance.
    pub precision_normal_fee: f64,
    /// Flat per-unit fee for High (±0.2mm) tolerance, charged on top of the
    /// amortized machining base fee.
    pub precision_high_fee: f64,
    /// Fixed per-job machining setup cost, amortized across the batch.
    pub machining_base_total: f64,
    /// Machining fee for cut shapes (gasket, disc) as a fraction of the
    /// bounding-square stock material cost.
    pub machining_material_rate: f64,
    pub unknown_shape_behavior: UnknownShapeBehavior,
    /// Manufacturing-floor weight (kg); no quote reports less.
    pub min_weight_kg: f64,
    /// Minimum-order-value floor.
    pub min_price: f64,
}

impl PricingConfig {
    /// Look up the per-kg shipping rate for a unit weight.
    ///
    /// Falls back to `fallback_shipping_rate` if no interval matches, which
    /// cannot happen while the table stays exhaustive.
    pub fn shipping_rate_for(&self, weight_kg: f64) -> f64 {
        self.shipping_tiers
            .iter()
            .find(|tier| weight_kg > tier.min_kg && weight_kg <= tier.max_kg)
            .map(|tier| tier.rate_per_kg)
            .unwrap_or(self.fallback_shipping_rate)
    }

    /// Look up the whole-order oversize fee for a critical dimension.
    ///
    /// Dimensions within the first tier are free; a fall-through (possible
    /// only for zero or negative dimensions) is also free.
    pub fn oversize_total_fee(&self, dimension_mm: f64) -> f64 {
        self.oversize_tiers
            .iter()
            .find(|tier| dimension_mm > tier.min_mm && dimension_mm <= tier.max_mm)
            .map(|tier| tier.fee)
            .unwrap_or(0.0)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            shipping_tiers: vec![
                ShippingTier { min_kg: 0.0, max_kg: 0.1, rate_per_kg: 40.0 },
                ShippingTier { min_kg: 0.1, max_kg: 0.5, rate_per_kg: 30.0 },
                ShippingTier { min_kg: 0.5, max_kg: 1.0, rate_per_kg: 20.0 },
                ShippingTier { min_kg: 1.0, max_kg: 2.0, rate_per_kg: 18.0 },
                ShippingTier { min_kg: 2.0, max_kg: 5.0, rate_per_kg: 15.0 },
                ShippingTier { min_kg: 5.0, max_kg: 10.0, rate_per_kg: 12.0 },
                ShippingTier { min_kg: 10.0, max_kg: f64::INFINITY, rate_per_kg: 12.0 },
            ],
            oversize_tiers: vec![
                OversizeTier { min_mm: 0.0, max_mm: 520.0, fee: 0.0 },
                OversizeTier { min_mm: 520.0, max_mm: 1100.0, fee: 20.0 },
                OversizeTier { min_mm: 1100.0, max_mm: f64::INFINITY, fee: 40.0 },
            ],
            shipping_policy: ShippingPolicy::Stepped,
            fallback_shipping_rate: 15.0,
            precision_normal_fee: 0.5,
            precision_high_fee: 0.5,
            machining_base_total: 20.0,
            machining_material_rate: 0.2,
            unknown_shape_behavior: UnknownShapeBehavior::LegacyZero,
            min_weight_kg: 0.001,
            min_price: 0.01,
        }
    }
}

/// Process-wide default configuration for callers without a custom schedule.
pub static DEFAULT_PRICING: Lazy<PricingConfig> = Lazy::new(PricingConfig::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_tiers_contiguous_and_exhaustive() {
        let config = PricingConfig::default();
        assert_eq!(config.shipping_tiers.first().unwrap().min_kg, 0.0);
        assert_eq!(config.shipping_tiers.last().unwrap().max_kg, f64::INFINITY);
        for pair in config.shipping_tiers.windows(2) {
            assert_eq!(pair[0].max_kg, pair[1].min_kg);
        }
    }

    #[test]
    fn test_oversize_tiers_contiguous_and_exhaustive() {
        let config = PricingConfig::default();
        assert_eq!(config.oversize_tiers.first().unwrap().min_mm, 0.0);
        assert_eq!(config.oversize_tiers.first().unwrap().fee, 0.0);
        assert_eq!(config.oversize_tiers.last().unwrap().max_mm, f64::INFINITY);
        for pair in config.oversize_tiers.windows(2) {
            assert_eq!(pair[0].max_mm, pair[1].min_mm);
        }
    }

    #[test]
    fn test_shipping_rate_boundaries_upper_inclusive() {
        let config = PricingConfig::default();
        assert_eq!(config.shipping_rate_for(0.05), 40.0);
        assert_eq!(config.shipping_rate_for(0.1), 40.0);
        assert_eq!(config.shipping_rate_for(0.1001), 30.0);
        assert_eq!(config.shipping_rate_for(1.0), 20.0);
        assert_eq!(config.shipping_rate_for(7.5), 12.0);
        assert_eq!(config.shipping_rate_for(250.0), 12.0);
    }

    #[test]
    fn test_oversize_fee_boundaries_upper_inclusive() {
        let config = PricingConfig::default();
        assert_eq!(config.oversize_total_fee(500.0), 0.0);
        assert_eq!(config.oversize_total_fee(520.0), 0.0);
        assert_eq!(config.oversize_total_fee(520.0001), 20.0);
        assert_eq!(config.oversize_total_fee(1100.0), 20.0);
        assert_eq!(config.oversize_total_fee(1100.5), 40.0);
    }

    #[test]
    fn test_zero_weight_falls_through_to_default_rate() {
        // Interval lookups are lower-exclusive, so 0 matches nothing.
        let config = PricingConfig::default();
        assert_eq!(config.shipping_rate_for(0.0), 15.0);
        assert_eq!(config.oversize_total_fee(0.0), 0.0);
    }

    #[test]
    fn test_default_static_matches_default() {
        assert_eq!(*DEFAULT_PRICING, PricingConfig::default());
    }
}
