//! # Sheet Calculation
//!
//! Rectangular cut sheet: the workhorse shape. Volume is plain
//! length × width × thickness; the oversize surcharge takes whichever of
//! length or width lands in the higher tier.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::sheet::{calculate, SheetInput};
//! use quote_core::config::PricingConfig;
//! use quote_core::fees::Precision;
//!
//! let input = SheetInput {
//!     thickness_mm: 2.0,
//!     length_mm: 500.0,
//!     width_mm: 500.0,
//!     precision: Precision::Normal,
//!     density_g_cm3: 1.2,
//!     quantity: 1,
//!     unit_price: 10.0,
//! };
//! let quote = calculate(&input, &PricingConfig::default());
//! assert_eq!(quote.weight, 0.6);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::fees::{self, Precision};
use crate::quote::{CostBreakdown, Quote};

/// Input parameters for a rectangular sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetInput {
    /// Sheet thickness in millimeters
    pub thickness_mm: f64,

    /// Cut length in millimeters
    pub length_mm: f64,

    /// Cut width in millimeters
    pub width_mm: f64,

    /// Requested tolerance class
    pub precision: Precision,

    /// Material density in g/cm³
    pub density_g_cm3: f64,

    /// Units ordered (flat fees amortize across this)
    pub quantity: u32,

    /// Material price per kilogram
    pub unit_price: f64,
}

/// Quote a sheet. Never fails: degenerate inputs flow through the weight
/// and price floors to a minimum-bound result.
pub fn calculate(input: &SheetInput, config: &PricingConfig) -> Quote {
    let volume_mm3 = input.length_mm * input.width_mm * input.thickness_mm;
    let weight_kg = (volume_mm3 * input.density_g_cm3 / 1_000_000.0).max(config.min_weight_kg);

    // Oversize is charged once, on the worse of the two dimensions.
    let length_fee = fees::oversize_fee(input.length_mm, input.quantity, config);
    let width_fee = fees::oversize_fee(input.width_mm, input.quantity, config);

    let breakdown = CostBreakdown {
        material: weight_kg * input.unit_price,
        precision: fees::precision_fee(input.precision, input.quantity, config),
        oversize: length_fee.max(width_fee),
        shipping: fees::shipping_fee(weight_kg, input.quantity, config),
        ..CostBreakdown::default()
    };

    Quote::from_breakdown(weight_kg, breakdown, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sheet() -> SheetInput {
        SheetInput {
            thickness_mm: 2.0,
            length_mm: 500.0,
            width_mm: 500.0,
            precision: Precision::Normal,
            density_g_cm3: 1.2,
            quantity: 1,
            unit_price: 10.0,
        }
    }

    #[test]
    fn test_reference_sheet_quote() {
        let quote = calculate(&test_sheet(), &PricingConfig::default());
        // 500 * 500 * 2 * 1.2 / 1e6 = 0.6 kg
        assert_eq!(quote.weight, 0.6);
        // 6.00 material + 0.50 precision + 12.00 shipping (0.6 kg @ 20/kg)
        assert_eq!(quote.price, "18.50");
        assert!((quote.breakdown.material - 6.0).abs() < 1e-12);
        assert!((quote.breakdown.shipping - 12.0).abs() < 1e-12);
        assert_eq!(quote.breakdown.oversize, 0.0);
    }

    #[test]
    fn test_oversize_takes_worse_dimension() {
        let mut input = test_sheet();
        input.length_mm = 1200.0; // 40 tier
        input.width_mm = 600.0; // 20 tier
        let quote = calculate(&input, &PricingConfig::default());
        assert_eq!(quote.breakdown.oversize, 40.0);
    }

    #[test]
    fn test_oversize_boundary_exact() {
        let config = PricingConfig::default();
        let mut input = test_sheet();
        input.length_mm = 520.0;
        assert_eq!(calculate(&input, &config).breakdown.oversize, 0.0);
        input.length_mm = 520.0001;
        assert_eq!(calculate(&input, &config).breakdown.oversize, 20.0);
    }

    #[test]
    fn test_zeroed_input_hits_floors() {
        let input = SheetInput {
            thickness_mm: 0.0,
            length_mm: 0.0,
            width_mm: 0.0,
            precision: Precision::None,
            density_g_cm3: 0.0,
            quantity: 1,
            unit_price: 0.0,
        };
        let quote = calculate(&input, &PricingConfig::default());
        assert_eq!(quote.weight, 0.001);
        // The floored weight still ships: 0.001 kg at the 40/kg tier.
        assert_eq!(quote.price, "0.04");
        assert!(quote.price_value() >= 0.01);
    }

    #[test]
    fn test_weight_monotone_in_thickness() {
        let config = PricingConfig::default();
        let mut input = test_sheet();
        let thin = calculate(&input, &config);
        input.thickness_mm = 3.0;
        let thick = calculate(&input, &config);
        assert!(thick.weight > thin.weight);
        assert!(thick.price_value() > thin.price_value());
    }

    #[test]
    fn test_determinism() {
        let config = PricingConfig::default();
        let input = test_sheet();
        let a = calculate(&input, &config);
        let b = calculate(&input, &config);
        assert_eq!(a.price, b.price);
        assert_eq!(a.weight, b.weight);
    }
}
