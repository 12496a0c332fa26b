//! # Rod Calculation
//!
//! Rigid round bar cut to length. Cylindrical volume; the oversize
//! surcharge is length-based only, since bar diameters never approach the
//! tier thresholds.

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::fees::{self, Precision};
use crate::quote::{CostBreakdown, Quote};

/// Input parameters for a rigid rod.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RodInput {
    /// Bar diameter in millimeters
    pub diameter_mm: f64,

    /// Cut length in millimeters
    pub length_mm: f64,

    /// Requested tolerance class
    pub precision: Precision,

    /// Material density in g/cm³
    pub density_g_cm3: f64,

    /// Units ordered
    pub quantity: u32,

    /// Material price per kilogram
    pub unit_price: f64,
}

/// Quote a rod. Never fails.
pub fn calculate(input: &RodInput, config: &PricingConfig) -> Quote {
    let radius_mm = input.diameter_mm / 2.0;
    let volume_mm3 = std::f64::consts::PI * radius_mm * radius_mm * input.length_mm;
    let weight_kg = (volume_mm3 * input.density_g_cm3 / 1_000_000.0).max(config.min_weight_kg);

    let breakdown = CostBreakdown {
        material: weight_kg * input.unit_price,
        precision: fees::precision_fee(input.precision, input.quantity, config),
        oversize: fees::oversize_fee(input.length_mm, input.quantity, config),
        shipping: fees::shipping_fee(weight_kg, input.quantity, config),
        ..CostBreakdown::default()
    };

    Quote::from_breakdown(weight_kg, breakdown, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rod() -> RodInput {
        RodInput {
            diameter_mm: 20.0,
            length_mm: 1000.0,
            precision: Precision::None,
            density_g_cm3: 1.4,
            quantity: 1,
            unit_price: 8.0,
        }
    }

    #[test]
    fn test_rod_weight_from_cylinder_volume() {
        let quote = calculate(&test_rod(), &PricingConfig::default());
        // pi * 10^2 * 1000 * 1.4 / 1e6 = 0.43982 kg, reported to 3 decimals
        assert_eq!(quote.weight, 0.44);
    }

    #[test]
    fn test_rod_oversize_is_length_based() {
        let config = PricingConfig::default();
        let mut input = test_rod();
        // 1000 mm lands in the middle tier.
        assert_eq!(calculate(&input, &config).breakdown.oversize, 20.0);
        input.length_mm = 400.0;
        assert_eq!(calculate(&input, &config).breakdown.oversize, 0.0);
    }

    #[test]
    fn test_high_precision_amortizes_setup() {
        let config = PricingConfig::default();
        let mut input = test_rod();
        input.precision = Precision::High;
        input.quantity = 10;
        let quote = calculate(&input, &config);
        // 0.5 + 20/10
        assert!((quote.breakdown.precision - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_unparsable_diameter_becomes_floor_quote() {
        // The boundary layer turns a bad diameter string into 0.0; the
        // calculator must still produce the floored result.
        let input = RodInput {
            diameter_mm: 0.0,
            length_mm: 500.0,
            precision: Precision::None,
            density_g_cm3: 1.4,
            quantity: 1,
            unit_price: 8.0,
        };
        let quote = calculate(&input, &PricingConfig::default());
        assert_eq!(quote.weight, 0.001);
        // Only the near-zero material and shipping terms remain.
        assert!(quote.price_value() >= 0.01);
    }
}
