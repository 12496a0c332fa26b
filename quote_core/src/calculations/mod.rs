//! # Shape Calculators
//!
//! One calculator per product form. Each follows the same pattern:
//!
//! - `*Input` - strict-typed parameters (JSON-serializable)
//! - `calculate(input, config) -> Quote` - pure, infallible quoting function
//!
//! Every calculator runs the same skeleton: geometric volume in mm³, weight
//! through the uniform `volume * density / 1e6` conversion with the
//! manufacturing floor, material cost, the shape's applicable surcharges,
//! then the price floor and fixed-point formatting.
//!
//! ## Available Shapes
//!
//! - [`sheet`] - rectangular cut sheet
//! - [`film`] - thin film by the meter
//! - [`rod`] - rigid round bar
//! - [`flexible_rod`] - flexible cord by the meter
//! - [`gasket`] - annular ring cut from square stock
//! - [`disc`] - solid circle cut from square stock

pub mod disc;
pub mod film;
pub mod flexible_rod;
pub mod gasket;
pub mod rod;
pub mod sheet;

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::quote::Quote;

// Re-export the input types
pub use disc::DiscInput;
pub use film::FilmInput;
pub use flexible_rod::FlexibleRodInput;
pub use gasket::GasketInput;
pub use rod::RodInput;
pub use sheet::SheetInput;

/// Closed union over all quotable shapes.
///
/// Matching is exhaustive: a request that reaches this type has already
/// been recognized, so there is no unknown-shape path here. The lenient
/// fallback lives at the [`crate::request`] boundary where free-form
/// discriminator strings arrive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeInput {
    /// Rectangular cut sheet
    Sheet(SheetInput),
    /// Thin film by the meter
    Film(FilmInput),
    /// Rigid round bar
    Rod(RodInput),
    /// Flexible cord by the meter
    FlexibleRod(FlexibleRodInput),
    /// Annular ring
    Gasket(GasketInput),
    /// Solid circle
    Disc(DiscInput),
}

impl ShapeInput {
    /// Quote this shape. Pure and infallible for every variant.
    pub fn calculate(&self, config: &PricingConfig) -> Quote {
        match self {
            ShapeInput::Sheet(input) => sheet::calculate(input, config),
            ShapeInput::Film(input) => film::calculate(input, config),
            ShapeInput::Rod(input) => rod::calculate(input, config),
            ShapeInput::FlexibleRod(input) => flexible_rod::calculate(input, config),
            ShapeInput::Gasket(input) => gasket::calculate(input, config),
            ShapeInput::Disc(input) => disc::calculate(input, config),
        }
    }

    /// The storefront's discriminator string for this shape.
    pub fn form_type(&self) -> &'static str {
        match self {
            ShapeInput::Sheet(_) => "Sheet",
            ShapeInput::Film(_) => "Film",
            ShapeInput::Rod(_) => "Rod",
            ShapeInput::FlexibleRod(_) => "Flexible Rod",
            ShapeInput::Gasket(_) => "Gasket",
            ShapeInput::Disc(_) => "Disc",
        }
    }

    /// Units ordered, for callers that aggregate batch totals.
    pub fn quantity(&self) -> u32 {
        match self {
            ShapeInput::Sheet(input) => input.quantity,
            ShapeInput::Film(input) => input.quantity,
            ShapeInput::Rod(input) => input.quantity,
            ShapeInput::FlexibleRod(input) => input.quantity,
            ShapeInput::Gasket(input) => input.quantity,
            ShapeInput::Disc(input) => input.quantity,
        }
    }
}
