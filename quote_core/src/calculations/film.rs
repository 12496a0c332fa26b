//! # Film Calculation
//!
//! Thin film sold by the meter off a roll. Length arrives in meters and is
//! converted to millimeters before the volume formula; only the width can
//! trip the oversize surcharge (roll length is not a shipping constraint),
//! and films carry no tolerance class.

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::fees;
use crate::quote::{CostBreakdown, Quote};

/// Input parameters for a film cut off a roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmInput {
    /// Film thickness in millimeters
    pub thickness_mm: f64,

    /// Ordered length in meters
    pub length_m: f64,

    /// Roll width in millimeters
    pub width_mm: f64,

    /// Material density in g/cm³
    pub density_g_cm3: f64,

    /// Units ordered
    pub quantity: u32,

    /// Material price per kilogram
    pub unit_price: f64,
}

/// Quote a film. Never fails.
pub fn calculate(input: &FilmInput, config: &PricingConfig) -> Quote {
    let length_mm = input.length_m * 1000.0;
    let volume_mm3 = length_mm * input.width_mm * input.thickness_mm;
    let weight_kg = (volume_mm3 * input.density_g_cm3 / 1_000_000.0).max(config.min_weight_kg);

    let breakdown = CostBreakdown {
        material: weight_kg * input.unit_price,
        oversize: fees::oversize_fee(input.width_mm, input.quantity, config),
        shipping: fees::shipping_fee(weight_kg, input.quantity, config),
        ..CostBreakdown::default()
    };

    Quote::from_breakdown(weight_kg, breakdown, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_film() -> FilmInput {
        FilmInput {
            thickness_mm: 0.1,
            length_m: 2.0,
            width_mm: 300.0,
            density_g_cm3: 1.2,
            quantity: 1,
            unit_price: 15.0,
        }
    }

    #[test]
    fn test_film_length_meters_to_mm() {
        let quote = calculate(&test_film(), &PricingConfig::default());
        // 2000 * 300 * 0.1 * 1.2 / 1e6 = 0.072 kg
        assert_eq!(quote.weight, 0.072);
    }

    #[test]
    fn test_film_oversize_is_width_only() {
        let config = PricingConfig::default();
        let mut input = test_film();
        // A very long roll does not trigger the surcharge...
        input.length_m = 50.0;
        assert_eq!(calculate(&input, &config).breakdown.oversize, 0.0);
        // ...but a wide one does.
        input.width_mm = 600.0;
        assert_eq!(calculate(&input, &config).breakdown.oversize, 20.0);
    }

    #[test]
    fn test_film_has_no_precision_term() {
        let quote = calculate(&test_film(), &PricingConfig::default());
        assert_eq!(quote.breakdown.precision, 0.0);
    }

    #[test]
    fn test_light_film_ships_at_top_rate() {
        let quote = calculate(&test_film(), &PricingConfig::default());
        // 0.072 kg lands in the (0, 0.1] tier at 40/kg.
        assert!((quote.breakdown.shipping - 0.072 * 40.0).abs() < 1e-12);
    }
}
