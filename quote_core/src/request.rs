//! # Request Boundary
//!
//! The generic, optional-field-heavy parameter bag the storefront submits,
//! and the dispatch facade that turns it into a [`Quote`].
//!
//! Two quirks of the wire format are preserved deliberately:
//!
//! - `thickness` and `diameter` arrive as strings because they originate
//!   from product metadata, not form input. Parsing happens here and only
//!   here; everything past this module works on strict numerics.
//! - An unrecognized `formType` does not error. It returns the configured
//!   fallback quote so a storefront bug can never crash a price preview.
//!
//! [`QuoteRequest::validate`] offers the order form's field-level checks as
//! a library helper. The engine itself never calls it: quoting always
//! succeeds, validation is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::calculations::{
    DiscInput, FilmInput, FlexibleRodInput, GasketInput, RodInput, ShapeInput, SheetInput,
};
use crate::config::PricingConfig;
use crate::errors::{QuoteError, QuoteResult};
use crate::fees::Precision;
use crate::quote::Quote;

/// Parse a locale-invariant decimal string; unparsable, missing, or
/// non-finite values become `0.0`.
pub fn parse_decimal_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn default_quantity() -> u32 {
    1
}

/// The raw calculation request as submitted by the storefront.
///
/// Field names follow the JavaScript wire format. Every field is optional
/// on the wire; absent dimensions default to zero and flow through the
/// engine's floors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Shape discriminator: "Sheet", "Film", "Rod", "Flexible Rod",
    /// "Gasket" or "Disc"
    pub form_type: String,

    /// Thickness in mm, as a metadata string (Sheet, Film, Gasket, Disc)
    pub thickness: String,

    /// Diameter in mm, as a metadata string (Rod, Flexible Rod)
    pub diameter: String,

    /// Material density in g/cm³
    pub density: f64,

    /// Cut length in mm (Sheet, Rod)
    pub length_mm: Option<f64>,

    /// Ordered length in meters (Film, Flexible Rod)
    pub length_m: Option<f64>,

    /// Width in mm (Sheet, Film)
    pub width_mm: Option<f64>,

    /// Bore diameter in mm (Gasket)
    pub inner_diameter_mm: Option<f64>,

    /// Outer diameter in mm (Gasket)
    pub outer_diameter_mm: Option<f64>,

    /// Disc diameter in mm (Disc)
    pub diameter_mm: Option<f64>,

    /// Tolerance tag (Sheet, Rod); free-form, unknown tags mean none
    pub precision: String,

    /// Units ordered
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Material price per kilogram
    pub unit_price: f64,
}

impl QuoteRequest {
    /// Map onto the shape the discriminator names, substituting zero for
    /// absent fields. `None` for an unrecognized discriminator.
    pub fn to_shape(&self) -> Option<ShapeInput> {
        let quantity = self.quantity.max(1);
        match self.form_type.as_str() {
            "Sheet" => Some(ShapeInput::Sheet(SheetInput {
                thickness_mm: parse_decimal_or_zero(&self.thickness),
                length_mm: self.length_mm.unwrap_or(0.0),
                width_mm: self.width_mm.unwrap_or(0.0),
                precision: Precision::from_tag(&self.precision),
                density_g_cm3: self.density,
                quantity,
                unit_price: self.unit_price,
            })),
            "Film" => Some(ShapeInput::Film(FilmInput {
                thickness_mm: parse_decimal_or_zero(&self.thickness),
                length_m: self.length_m.unwrap_or(0.0),
                width_mm: self.width_mm.unwrap_or(0.0),
                density_g_cm3: self.density,
                quantity,
                unit_price: self.unit_price,
            })),
            "Rod" => Some(ShapeInput::Rod(RodInput {
                diameter_mm: parse_decimal_or_zero(&self.diameter),
                length_mm: self.length_mm.unwrap_or(0.0),
                precision: Precision::from_tag(&self.precision),
                density_g_cm3: self.density,
                quantity,
                unit_price: self.unit_price,
            })),
            "Flexible Rod" => Some(ShapeInput::FlexibleRod(FlexibleRodInput {
                diameter_mm: parse_decimal_or_zero(&self.diameter),
                length_m: self.length_m.unwrap_or(0.0),
                density_g_cm3: self.density,
                quantity,
                unit_price: self.unit_price,
            })),
            "Gasket" => Some(ShapeInput::Gasket(GasketInput {
                thickness_mm: parse_decimal_or_zero(&self.thickness),
                inner_diameter_mm: self.inner_diameter_mm.unwrap_or(0.0),
                outer_diameter_mm: self.outer_diameter_mm.unwrap_or(0.0),
                density_g_cm3: self.density,
                quantity,
                unit_price: self.unit_price,
            })),
            "Disc" => Some(ShapeInput::Disc(DiscInput {
                thickness_mm: parse_decimal_or_zero(&self.thickness),
                diameter_mm: self.diameter_mm.unwrap_or(0.0),
                density_g_cm3: self.density,
                quantity,
                unit_price: self.unit_price,
            })),
            _ => None,
        }
    }

    /// The order form's pre-submission checks. The engine quotes without
    /// them; callers that want a hard failure for nonsense geometry run
    /// this first.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.to_shape().is_none() {
            return Err(QuoteError::unknown_shape(&self.form_type));
        }
        if self.quantity == 0 {
            return Err(QuoteError::invalid_input(
                "quantity",
                self.quantity.to_string(),
                "Quantity must be at least 1",
            ));
        }
        if self.density <= 0.0 {
            return Err(QuoteError::invalid_input(
                "density",
                self.density.to_string(),
                "Density must be positive",
            ));
        }
        if self.unit_price < 0.0 {
            return Err(QuoteError::invalid_input(
                "unitPrice",
                self.unit_price.to_string(),
                "Unit price cannot be negative",
            ));
        }
        for (field, value) in [
            ("lengthMm", self.length_mm),
            ("lengthM", self.length_m),
            ("widthMm", self.width_mm),
            ("innerDiameterMm", self.inner_diameter_mm),
            ("outerDiameterMm", self.outer_diameter_mm),
            ("diameterMm", self.diameter_mm),
        ] {
            if let Some(value) = value {
                if value < 0.0 {
                    return Err(QuoteError::invalid_input(
                        field,
                        value.to_string(),
                        "Dimensions cannot be negative",
                    ));
                }
            }
        }
        if self.form_type == "Gasket" {
            let inner = self.inner_diameter_mm.unwrap_or(0.0);
            let outer = self.outer_diameter_mm.unwrap_or(0.0);
            if outer <= inner {
                return Err(QuoteError::invalid_input(
                    "outerDiameterMm",
                    outer.to_string(),
                    "Outer diameter must exceed inner diameter",
                ));
            }
        }
        Ok(())
    }
}

/// Quote a raw storefront request.
///
/// The single entry point both the price preview and the checkout handler
/// call. Never fails: recognized shapes dispatch to their calculator,
/// anything else returns the configured fallback quote.
pub fn calculate_price_and_weight(request: &QuoteRequest, config: &PricingConfig) -> Quote {
    match request.to_shape() {
        Some(shape) => shape.calculate(config),
        None => Quote::unknown_shape_fallback(config),
    }
}
