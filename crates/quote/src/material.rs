use std::fmt;

use serde::{Deserialize, Serialize};

/// Filament offered for printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Material {
    Pla,
    Petg,
    Abs,
    Tpu,
}

impl Material {
    pub const ALL: [Material; 4] = [Material::Pla, Material::Petg, Material::Abs, Material::Tpu];

    pub fn label(&self) -> &'static str {
        match self {
            Material::Pla => "PLA",
            Material::Petg => "PETG",
            Material::Abs => "ABS",
            Material::Tpu => "TPU",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price per cm³ for each material, in one currency.
///
/// The calculator and the public pricing page quote different numbers. They
/// are kept as two named tiers and never converted into each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// ISO 4217 code, e.g. `USD`.
    pub currency: String,
    pub pla: f64,
    pub petg: f64,
    pub abs: f64,
    pub tpu: f64,
}

impl RateTable {
    /// Rates used by the interactive quote calculator.
    pub fn calculator_usd() -> Self {
        Self {
            currency: "USD".to_string(),
            pla: 0.25,
            petg: 0.35,
            abs: 0.40,
            tpu: 0.55,
        }
    }

    /// Rates advertised on the pricing page.
    pub fn pricing_page_inr() -> Self {
        Self {
            currency: "INR".to_string(),
            pla: 15.0,
            petg: 25.0,
            abs: 30.0,
            tpu: 40.0,
        }
    }

    pub fn rate(&self, material: Material) -> f64 {
        match material {
            Material::Pla => self.pla,
            Material::Petg => self.petg,
            Material::Abs => self.abs,
            Material::Tpu => self.tpu,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::calculator_usd()
    }
}
