//! # Stock Materials
//!
//! The engineering plastics the shop cuts to order. In production the
//! density and per-kg price ride in on product metadata, so the engine
//! itself only ever sees raw numbers; this database backs the CLI's
//! named-material requests and gives tests realistic fixtures.
//!
//! Densities are textbook values in g/cm³. Reference prices are list
//! prices per kilogram and are superseded by product metadata whenever the
//! storefront supplies one.

use serde::{Deserialize, Serialize};

/// Physical and commercial properties of a stock material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Density in g/cm³
    pub density_g_cm3: f64,
    /// List price per kilogram
    pub reference_unit_price: f64,
}

/// The stock plastics available for custom cutting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockMaterial {
    /// PTFE (Teflon)
    Ptfe,
    /// PEEK
    Peek,
    /// POM (acetal / Delrin)
    Pom,
    /// PA6 (nylon 6)
    Pa6,
    /// UHMW polyethylene
    UhmwPe,
    /// Rigid PVC
    Pvc,
    /// Polycarbonate
    Pc,
    /// PMMA (acrylic)
    Pmma,
}

impl StockMaterial {
    /// Every stocked material, for pickers and iteration.
    pub const ALL: [StockMaterial; 8] = [
        StockMaterial::Ptfe,
        StockMaterial::Peek,
        StockMaterial::Pom,
        StockMaterial::Pa6,
        StockMaterial::UhmwPe,
        StockMaterial::Pvc,
        StockMaterial::Pc,
        StockMaterial::Pmma,
    ];

    /// Look up density and reference price.
    pub fn properties(&self) -> MaterialProperties {
        match self {
            StockMaterial::Ptfe => MaterialProperties {
                density_g_cm3: 2.2,
                reference_unit_price: 28.0,
            },
            StockMaterial::Peek => MaterialProperties {
                density_g_cm3: 1.3,
                reference_unit_price: 95.0,
            },
            StockMaterial::Pom => MaterialProperties {
                density_g_cm3: 1.41,
                reference_unit_price: 12.0,
            },
            StockMaterial::Pa6 => MaterialProperties {
                density_g_cm3: 1.15,
                reference_unit_price: 10.0,
            },
            StockMaterial::UhmwPe => MaterialProperties {
                density_g_cm3: 0.93,
                reference_unit_price: 9.0,
            },
            StockMaterial::Pvc => MaterialProperties {
                density_g_cm3: 1.4,
                reference_unit_price: 6.0,
            },
            StockMaterial::Pc => MaterialProperties {
                density_g_cm3: 1.2,
                reference_unit_price: 11.0,
            },
            StockMaterial::Pmma => MaterialProperties {
                density_g_cm3: 1.19,
                reference_unit_price: 8.0,
            },
        }
    }

    /// Display name as listed on the storefront.
    pub fn display_name(&self) -> &'static str {
        match self {
            StockMaterial::Ptfe => "PTFE",
            StockMaterial::Peek => "PEEK",
            StockMaterial::Pom => "POM",
            StockMaterial::Pa6 => "PA6",
            StockMaterial::UhmwPe => "UHMW-PE",
            StockMaterial::Pvc => "PVC",
            StockMaterial::Pc => "PC",
            StockMaterial::Pmma => "PMMA",
        }
    }

    /// Look up a material by its display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        StockMaterial::ALL
            .iter()
            .copied()
            .find(|material| material.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for StockMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
