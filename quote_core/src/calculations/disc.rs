//! # Disc Calculation
//!
//! Solid circle cut from square stock sheet. Identical cost structure to
//! the gasket — machining base fee plus the bounding-square machining
//! material fee — with a plain circular volume and no bore.

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::fees;
use crate::quote::{CostBreakdown, Quote};

/// Input parameters for a solid disc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscInput {
    /// Disc thickness in millimeters
    pub thickness_mm: f64,

    /// Disc diameter in millimeters
    pub diameter_mm: f64,

    /// Material density in g/cm³
    pub density_g_cm3: f64,

    /// Units ordered
    pub quantity: u32,

    /// Material price per kilogram
    pub unit_price: f64,
}

/// Quote a disc. Never fails.
pub fn calculate(input: &DiscInput, config: &PricingConfig) -> Quote {
    let radius_mm = input.diameter_mm / 2.0;
    let area_mm2 = std::f64::consts::PI * radius_mm * radius_mm;
    let volume_mm3 = area_mm2 * input.thickness_mm;
    let weight_kg = (volume_mm3 * input.density_g_cm3 / 1_000_000.0).max(config.min_weight_kg);

    let breakdown = CostBreakdown {
        material: weight_kg * input.unit_price,
        oversize: fees::oversize_fee(input.diameter_mm, input.quantity, config),
        shipping: fees::shipping_fee(weight_kg, input.quantity, config),
        machining_base: fees::machining_base_fee(input.quantity, config),
        machining_material: fees::machining_material_fee(
            input.diameter_mm,
            input.thickness_mm,
            input.density_g_cm3,
            input.unit_price,
            config,
        ),
        ..CostBreakdown::default()
    };

    Quote::from_breakdown(weight_kg, breakdown, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_disc() -> DiscInput {
        DiscInput {
            thickness_mm: 5.0,
            diameter_mm: 80.0,
            density_g_cm3: 1.41,
            quantity: 1,
            unit_price: 12.0,
        }
    }

    #[test]
    fn test_disc_weight_from_circular_volume() {
        let quote = calculate(&test_disc(), &PricingConfig::default());
        // pi * 40^2 * 5 * 1.41 / 1e6 = 0.0354 kg
        assert_eq!(quote.weight, 0.035);
    }

    #[test]
    fn test_minimum_disc_price_exceeds_material_cost() {
        // The smallest disc the shop sells still pays the machining setup.
        let input = DiscInput {
            thickness_mm: 1.0,
            diameter_mm: 10.0,
            density_g_cm3: 1.0,
            quantity: 1,
            unit_price: 5.0,
        };
        let quote = calculate(&input, &PricingConfig::default());
        assert_eq!(quote.weight, 0.001);
        assert!(quote.price_value() > quote.breakdown.material);
        assert_eq!(quote.breakdown.machining_base, 20.0);
    }

    #[test]
    fn test_machining_material_uses_bounding_square() {
        let config = PricingConfig::default();
        let input = test_disc();
        let quote = calculate(&input, &config);
        let blank_kg = 80.0 * 80.0 * 5.0 * 1.41 / 1_000_000.0;
        let expected = config.machining_material_rate * blank_kg * input.unit_price;
        assert!((quote.breakdown.machining_material - expected).abs() < 1e-12);
    }

    #[test]
    fn test_disc_oversize_on_diameter() {
        let config = PricingConfig::default();
        let mut input = test_disc();
        input.diameter_mm = 520.0;
        assert_eq!(calculate(&input, &config).breakdown.oversize, 0.0);
        input.diameter_mm = 521.0;
        assert_eq!(calculate(&input, &config).breakdown.oversize, 20.0);
    }

    #[test]
    fn test_fees_amortize_across_batch() {
        let config = PricingConfig::default();
        let mut input = test_disc();
        input.diameter_mm = 600.0;
        input.quantity = 4;
        let quote = calculate(&input, &config);
        assert_eq!(quote.breakdown.machining_base, 5.0);
        assert_eq!(quote.breakdown.oversize, 5.0);
    }
}
