//! # Load Units and Conversion
//!
//! The engine accepts loads in a small fixed vocabulary of units and
//! normalizes everything to a single consistent linear load in kN/m.
//!
//! ## Conversion rules
//!
//! - Mass units (kg, kg/m, kg/m²) are converted to force via [`KG_TO_KN`],
//!   then processed like their force counterparts.
//! - Per-area units (kN/m², kg/m²) require a tributary width (floor beams)
//!   or purlin spacing to become per-length.
//! - Pure force units (kN, kg) are distributed uniformly over the span.
//!
//! Each unit is an explicit enum variant with a declared conversion rule;
//! there is no string inspection at conversion time. Unit tokens from user
//! input are parsed once, up front, via [`LoadUnit::parse`].
//!
//! ## Example
//!
//! ```rust
//! use structo_core::units::{LoadUnit, convert_to_linear_load};
//!
//! // 12 kN concentrated load distributed over a 6 m span
//! let w = convert_to_linear_load(12.0, LoadUnit::KiloNewton, 6.0, 1.0).unwrap();
//! assert!((w - 2.0).abs() < 1e-12);
//!
//! // 0.7 kN/m² wind pressure on purlins at 1.5 m spacing
//! let w = convert_to_linear_load(0.7, LoadUnit::KiloNewtonPerSquareMeter, 6.0, 1.5).unwrap();
//! assert!((w - 1.05).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Gravitational conversion factor: 1 kg of mass weighs 0.00981 kN.
pub const KG_TO_KN: f64 = 0.00981;

/// A recognized load input unit.
///
/// The vocabulary matches the form inputs: {kN, kN/m, kN/m², kg, kg/m, kg/m²}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadUnit {
    /// kN - concentrated force
    #[serde(rename = "kN")]
    KiloNewton,
    /// kN/m - linear load
    #[serde(rename = "kN/m")]
    KiloNewtonPerMeter,
    /// kN/m² - area load
    #[serde(rename = "kN/m²", alias = "kN/m2")]
    KiloNewtonPerSquareMeter,
    /// kg - concentrated mass
    #[serde(rename = "kg")]
    Kilogram,
    /// kg/m - mass per length
    #[serde(rename = "kg/m")]
    KilogramPerMeter,
    /// kg/m² - mass per area
    #[serde(rename = "kg/m²", alias = "kg/m2")]
    KilogramPerSquareMeter,
}

impl LoadUnit {
    /// All units in display order
    pub const ALL: [LoadUnit; 6] = [
        LoadUnit::KiloNewton,
        LoadUnit::KiloNewtonPerMeter,
        LoadUnit::KiloNewtonPerSquareMeter,
        LoadUnit::Kilogram,
        LoadUnit::KilogramPerMeter,
        LoadUnit::KilogramPerSquareMeter,
    ];

    /// Parse a unit token, case-insensitively.
    ///
    /// Accepts both the superscript (`kN/m²`) and ASCII (`kN/m2`) spellings.
    ///
    /// # Example
    /// ```
    /// use structo_core::units::LoadUnit;
    /// assert_eq!(LoadUnit::parse("KG/M").unwrap(), LoadUnit::KilogramPerMeter);
    /// assert!(LoadUnit::parse("lbs").is_err());
    /// ```
    pub fn parse(token: &str) -> CalcResult<Self> {
        let normalized = token.trim().to_lowercase().replace('²', "2");
        match normalized.as_str() {
            "kn" => Ok(LoadUnit::KiloNewton),
            "kn/m" => Ok(LoadUnit::KiloNewtonPerMeter),
            "kn/m2" => Ok(LoadUnit::KiloNewtonPerSquareMeter),
            "kg" => Ok(LoadUnit::Kilogram),
            "kg/m" => Ok(LoadUnit::KilogramPerMeter),
            "kg/m2" => Ok(LoadUnit::KilogramPerSquareMeter),
            _ => Err(CalcError::unknown_unit(token)),
        }
    }

    /// Display token (matches the input vocabulary)
    pub fn token(&self) -> &'static str {
        match self {
            LoadUnit::KiloNewton => "kN",
            LoadUnit::KiloNewtonPerMeter => "kN/m",
            LoadUnit::KiloNewtonPerSquareMeter => "kN/m²",
            LoadUnit::Kilogram => "kg",
            LoadUnit::KilogramPerMeter => "kg/m",
            LoadUnit::KilogramPerSquareMeter => "kg/m²",
        }
    }

    /// Whether the unit expresses a mass rather than a force
    pub fn is_mass(&self) -> bool {
        matches!(
            self,
            LoadUnit::Kilogram | LoadUnit::KilogramPerMeter | LoadUnit::KilogramPerSquareMeter
        )
    }

    /// Whether the unit is already per unit length
    pub fn is_linear(&self) -> bool {
        matches!(self, LoadUnit::KiloNewtonPerMeter | LoadUnit::KilogramPerMeter)
    }

    /// Whether the unit is per unit area (needs a tributary width)
    pub fn is_area(&self) -> bool {
        matches!(
            self,
            LoadUnit::KiloNewtonPerSquareMeter | LoadUnit::KilogramPerSquareMeter
        )
    }

    /// Convert a magnitude in this unit to kN (concentrated), kN/m (linear)
    /// or kN/m² (area) depending on the unit's dimension.
    pub fn to_force(&self, value: f64) -> f64 {
        if self.is_mass() {
            value * KG_TO_KN
        } else {
            value
        }
    }
}

impl std::fmt::Display for LoadUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Normalize a load magnitude to an equivalent uniform linear load in kN/m.
///
/// - Linear units pass through (after any mass-to-force conversion).
/// - Area units are multiplied by `tributary_width_m`.
/// - Concentrated units are distributed uniformly over `span_m`.
///
/// Pure function, no side effects. `span_m` and `tributary_width_m` must be
/// positive; the design entry point validates them before conversion.
pub fn convert_to_linear_load(
    value: f64,
    unit: LoadUnit,
    span_m: f64,
    tributary_width_m: f64,
) -> CalcResult<f64> {
    if span_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "span_m",
            span_m.to_string(),
            "Span must be positive",
        ));
    }
    if unit.is_area() && tributary_width_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "tributary_width_m",
            tributary_width_m.to_string(),
            "Tributary width must be positive for per-area loads",
        ));
    }

    let force = unit.to_force(value);
    let linear = if unit.is_linear() {
        force
    } else if unit.is_area() {
        force * tributary_width_m
    } else {
        force / span_m
    };
    Ok(linear)
}
