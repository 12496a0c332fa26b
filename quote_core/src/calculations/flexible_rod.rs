//! # Flexible Rod Calculation
//!
//! Flexible round cord sold by the meter. Same cylinder formula as the
//! rigid rod, but it coils for transport, so neither the oversize surcharge
//! nor a tolerance class applies — shipping is the only fee on top of
//! material.

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::fees;
use crate::quote::{CostBreakdown, Quote};

/// Input parameters for a flexible rod.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexibleRodInput {
    /// Cord diameter in millimeters
    pub diameter_mm: f64,

    /// Ordered length in meters
    pub length_m: f64,

    /// Material density in g/cm³
    pub density_g_cm3: f64,

    /// Units ordered
    pub quantity: u32,

    /// Material price per kilogram
    pub unit_price: f64,
}

/// Quote a flexible rod. Never fails.
pub fn calculate(input: &FlexibleRodInput, config: &PricingConfig) -> Quote {
    let radius_mm = input.diameter_mm / 2.0;
    let length_mm = input.length_m * 1000.0;
    let volume_mm3 = std::f64::consts::PI * radius_mm * radius_mm * length_mm;
    let weight_kg = (volume_mm3 * input.density_g_cm3 / 1_000_000.0).max(config.min_weight_kg);

    let breakdown = CostBreakdown {
        material: weight_kg * input.unit_price,
        shipping: fees::shipping_fee(weight_kg, input.quantity, config),
        ..CostBreakdown::default()
    };

    Quote::from_breakdown(weight_kg, breakdown, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cord() -> FlexibleRodInput {
        FlexibleRodInput {
            diameter_mm: 6.0,
            length_m: 10.0,
            density_g_cm3: 0.93,
            quantity: 1,
            unit_price: 9.0,
        }
    }

    #[test]
    fn test_cord_weight() {
        let quote = calculate(&test_cord(), &PricingConfig::default());
        // pi * 3^2 * 10000 * 0.93 / 1e6 = 0.26295 kg
        assert_eq!(quote.weight, 0.263);
    }

    #[test]
    fn test_cord_charges_shipping_only() {
        let quote = calculate(&test_cord(), &PricingConfig::default());
        assert_eq!(quote.breakdown.precision, 0.0);
        assert_eq!(quote.breakdown.oversize, 0.0);
        assert_eq!(quote.breakdown.machining_base, 0.0);
        assert!(quote.breakdown.shipping > 0.0);
    }

    #[test]
    fn test_long_coil_still_no_oversize() {
        let mut input = test_cord();
        input.length_m = 100.0;
        let quote = calculate(&input, &PricingConfig::default());
        assert_eq!(quote.breakdown.oversize, 0.0);
    }
}
