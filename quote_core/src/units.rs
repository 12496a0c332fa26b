//! # Unit Conversion
//!
//! Metric/imperial conversion for the linked dimension fields the order form
//! renders (a millimeter box next to an inch box, a meter box next to a foot
//! box). Not part of the pricing formula — the engine works in millimeters
//! and kilograms throughout — but it shares the engine's numeric-precision
//! conventions, so it lives here rather than in the UI layer.
//!
//! Unsupported unit pairs return the input unchanged: the form treats a
//! same-unit conversion as identity, never as an error.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{convert, format_for_display, LengthUnit};
//!
//! let inches = convert(25.4, LengthUnit::Mm, LengthUnit::Inch);
//! assert_eq!(format_for_display(inches), "1");
//! ```

use serde::{Deserialize, Serialize};

/// Conversion factor between millimeters and inches.
pub const MM_PER_INCH: f64 = 25.4;

/// Conversion factor between meters and feet, as the storefront rounds it.
pub const FT_PER_M: f64 = 3.2808;

/// The length units the order form exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Mm,
    Inch,
    M,
    Ft,
}

impl LengthUnit {
    /// Parse a form unit label. Unknown labels are `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "mm" => Some(LengthUnit::Mm),
            "inch" => Some(LengthUnit::Inch),
            "m" => Some(LengthUnit::M),
            "ft" => Some(LengthUnit::Ft),
            _ => None,
        }
    }

    /// The form label for this unit.
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Inch => "inch",
            LengthUnit::M => "m",
            LengthUnit::Ft => "ft",
        }
    }
}

/// Convert a value between the supported unit pairs.
///
/// Supported pairs are mm↔inch and m↔ft; any other combination (including
/// same-unit) returns the value unchanged.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    match (from, to) {
        (LengthUnit::Mm, LengthUnit::Inch) => value / MM_PER_INCH,
        (LengthUnit::Inch, LengthUnit::Mm) => value * MM_PER_INCH,
        (LengthUnit::M, LengthUnit::Ft) => value * FT_PER_M,
        (LengthUnit::Ft, LengthUnit::M) => value / FT_PER_M,
        _ => value,
    }
}

/// Format a converted value the way the form displays it: rounded to three
/// decimal places with trailing zeros stripped (`1.500` becomes `"1.5"`,
/// `1.000` becomes `"1"`).
pub fn format_for_display(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
