//! # Gasket Calculation
//!
//! Annular ring cut from square stock sheet. Weight comes from the true
//! annular volume, but the machining material fee is estimated from the
//! bounding-square blank the ring is cut out of — the offcut is scrap the
//! shop pays for, so the square estimate is the correct basis even though
//! it reads like it should be the annular area.
//!
//! The engine does not check `outer > inner`; the order form rejects that
//! before submission. A direct call with inverted diameters produces a
//! negative volume that the weight floor absorbs.

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::fees;
use crate::quote::{CostBreakdown, Quote};

/// Input parameters for an annular gasket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasketInput {
    /// Gasket thickness in millimeters
    pub thickness_mm: f64,

    /// Inner (bore) diameter in millimeters
    pub inner_diameter_mm: f64,

    /// Outer diameter in millimeters
    pub outer_diameter_mm: f64,

    /// Material density in g/cm³
    pub density_g_cm3: f64,

    /// Units ordered
    pub quantity: u32,

    /// Material price per kilogram
    pub unit_price: f64,
}

/// Quote a gasket. Never fails.
pub fn calculate(input: &GasketInput, config: &PricingConfig) -> Quote {
    let outer_radius = input.outer_diameter_mm / 2.0;
    let inner_radius = input.inner_diameter_mm / 2.0;
    let area_mm2 =
        std::f64::consts::PI * (outer_radius * outer_radius - inner_radius * inner_radius);
    let volume_mm3 = area_mm2 * input.thickness_mm;
    let weight_kg = (volume_mm3 * input.density_g_cm3 / 1_000_000.0).max(config.min_weight_kg);

    let breakdown = CostBreakdown {
        material: weight_kg * input.unit_price,
        // Oversize is judged on the outer diameter.
        oversize: fees::oversize_fee(input.outer_diameter_mm, input.quantity, config),
        shipping: fees::shipping_fee(weight_kg, input.quantity, config),
        machining_base: fees::machining_base_fee(input.quantity, config),
        machining_material: fees::machining_material_fee(
            input.outer_diameter_mm,
            input.thickness_mm,
            input.density_g_cm3,
            input.unit_price,
            config,
        ),
        ..CostBreakdown::default()
    };

    Quote::from_breakdown(weight_kg, breakdown, config)
}
