//! # Shared Cost Policies
//!
//! The stateless fee functions every shape calculator composes: shipping,
//! oversize surcharge, precision surcharge, machining base fee, and the
//! bounding-square machining material fee. All are pure functions over
//! primitive numerics plus an injected [`PricingConfig`]; none perform I/O.
//!
//! Flat fees are amortized: a whole-order fee divided by quantity yields the
//! per-unit contribution the calculators sum into a unit price.

use serde::{Deserialize, Serialize};

use crate::config::{PricingConfig, ShippingPolicy};

/// Machining tolerance class requested for a part.
///
/// Parsed leniently from the storefront's tag strings; anything unrecognized
/// is treated as no tolerance request, matching the engine's always-degrade
/// input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Precision {
    /// No tolerance requested (empty or unrecognized tag)
    #[default]
    None,
    /// "Normal (±2mm)"
    Normal,
    /// "High (±0.2mm)"
    High,
}

impl Precision {
    /// Parse a storefront precision tag. Unknown tags map to `None`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Normal (±2mm)" => Precision::Normal,
            "High (±0.2mm)" => Precision::High,
            _ => Precision::None,
        }
    }

    /// The storefront tag string for this class.
    pub fn tag(&self) -> &'static str {
        match self {
            Precision::None => "",
            Precision::Normal => "Normal (±2mm)",
            Precision::High => "High (±0.2mm)",
        }
    }
}

impl From<String> for Precision {
    fn from(tag: String) -> Self {
        Precision::from_tag(&tag)
    }
}

impl From<Precision> for String {
    fn from(precision: Precision) -> Self {
        precision.tag().to_string()
    }
}

/// Per-unit shipping fee for a part of the given unit weight.
///
/// Under [`ShippingPolicy::Stepped`] the tiered per-kg rate is looked up
/// against the unit weight, so `weight * rate` is already a per-unit amount.
/// Under [`ShippingPolicy::FlatBatch`] the flat rate applies to the batch
/// weight and the total is amortized back across the quantity.
pub fn shipping_fee(weight_kg: f64, quantity: u32, config: &PricingConfig) -> f64 {
    let quantity = quantity.max(1) as f64;
    match config.shipping_policy {
        ShippingPolicy::Stepped => weight_kg * config.shipping_rate_for(weight_kg),
        ShippingPolicy::FlatBatch { rate_per_kg } => {
            let batch_fee = weight_kg * quantity * rate_per_kg;
            batch_fee / quantity
        }
    }
}

/// Per-unit oversize surcharge for a critical dimension.
///
/// The whole-order fee from the tier table, amortized across the quantity.
/// Dimensions within the first tier are free.
pub fn oversize_fee(dimension_mm: f64, quantity: u32, config: &PricingConfig) -> f64 {
    config.oversize_total_fee(dimension_mm) / quantity.max(1) as f64
}

/// Per-unit precision surcharge.
///
/// High tolerance additionally amortizes the machining setup cost across the
/// batch, since tight-tolerance parts always go through the machine shop.
pub fn precision_fee(precision: Precision, quantity: u32, config: &PricingConfig) -> f64 {
    match precision {
        Precision::None => 0.0,
        Precision::Normal => config.precision_normal_fee,
        Precision::High => config.precision_high_fee + machining_base_fee(quantity, config),
    }
}

/// Per-unit share of the fixed machining setup cost.
///
/// Used directly by the annular/disc shapes, which have no precision tiers
/// but still incur the per-job setup.
pub fn machining_base_fee(quantity: u32, config: &PricingConfig) -> f64 {
    config.machining_base_total / quantity.max(1) as f64
}

/// Per-unit machining fee proportional to the bounding-square stock cost.
///
/// Cut shapes (gasket, disc) are machined out of square stock sheet, so the
/// fee is a fraction of the material cost of a `side × side × thickness`
/// blank — deliberately not of the circular/annular part volume itself.
pub fn machining_material_fee(
    square_side_mm: f64,
    thickness_mm: f64,
    density_g_cm3: f64,
    unit_price: f64,
    config: &PricingConfig,
) -> f64 {
    let stock_volume_mm3 = square_side_mm * square_side_mm * thickness_mm;
    let stock_weight_kg = stock_volume_mm3 * density_g_cm3 / 1_000_000.0;
    config.machining_material_rate * stock_weight_kg * unit_price
}
