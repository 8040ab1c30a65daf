//! Load kind and contribution definitions
//!
//! This module defines the physical load categories the engine understands
//! and the immutable per-request contribution records the caller submits.

use serde::{Deserialize, Serialize};

use crate::units::LoadUnit;

/// Physical load categories considered in member design
///
/// # Example
/// ```
/// use structo_core::loads::LoadKind;
///
/// let dead = LoadKind::Dead;
/// assert_eq!(dead.code(), "D");
/// assert_eq!(dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadKind {
    /// D - Dead load (self-weight, floor cover, cladding)
    Dead,
    /// L - Live load (occupancy, roof live load)
    Live,
    /// W - Wind load (pressure on the tributary surface)
    Wind,
    /// M - Maintenance load (personnel, concentrated at midspan)
    Maintenance,
    /// A - Additional user-supplied load, folded into every combination
    Additional,
}

impl LoadKind {
    /// All load kinds in standard order
    pub const ALL: [LoadKind; 5] = [
        LoadKind::Dead,
        LoadKind::Live,
        LoadKind::Wind,
        LoadKind::Maintenance,
        LoadKind::Additional,
    ];

    /// Short abbreviation code
    pub fn code(&self) -> &'static str {
        match self {
            LoadKind::Dead => "D",
            LoadKind::Live => "L",
            LoadKind::Wind => "W",
            LoadKind::Maintenance => "M",
            LoadKind::Additional => "A",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadKind::Dead => "Dead load",
            LoadKind::Live => "Live load",
            LoadKind::Wind => "Wind load",
            LoadKind::Maintenance => "Maintenance load",
            LoadKind::Additional => "Additional load",
        }
    }

    /// Whether this kind may act as a concentrated midspan load
    pub fn may_be_concentrated(&self) -> bool {
        matches!(self, LoadKind::Maintenance)
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Idealized spatial load pattern on the simply supported span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadPattern {
    /// Uniformly distributed over the full span
    #[default]
    Uniform,
    /// Concentrated at midspan
    PointCenter,
}

impl LoadPattern {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadPattern::Uniform => "uniform",
            LoadPattern::PointCenter => "point at center",
        }
    }
}

impl std::fmt::Display for LoadPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single load entry as submitted by the caller.
///
/// Immutable once submitted; the engine aggregates contributions into a
/// [`super::LoadSet`] per design invocation and holds nothing between calls.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "Wind", "magnitude": 0.7, "unit": "kN/m²", "pattern_hint": "Uniform" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadContribution {
    /// Physical category of the load
    pub kind: LoadKind,

    /// Magnitude in `unit`
    pub magnitude: f64,

    /// Input unit
    pub unit: LoadUnit,

    /// Spatial idealization. Only a concentrated maintenance load is
    /// carried as a midspan point load; every other contribution becomes
    /// part of the uniform linear load.
    #[serde(default)]
    pub pattern_hint: LoadPattern,
}

impl LoadContribution {
    /// Create a uniformly distributed contribution
    pub fn uniform(kind: LoadKind, magnitude: f64, unit: LoadUnit) -> Self {
        LoadContribution {
            kind,
            magnitude,
            unit,
            pattern_hint: LoadPattern::Uniform,
        }
    }

    /// Create a concentrated midspan contribution
    pub fn point(kind: LoadKind, magnitude: f64, unit: LoadUnit) -> Self {
        LoadContribution {
            kind,
            magnitude,
            unit,
            pattern_hint: LoadPattern::PointCenter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_kind_codes() {
        assert_eq!(LoadKind::Dead.code(), "D");
        assert_eq!(LoadKind::Live.code(), "L");
        assert_eq!(LoadKind::Wind.code(), "W");
        assert_eq!(LoadKind::Maintenance.code(), "M");
        assert_eq!(LoadKind::Additional.code(), "A");
    }

    #[test]
    fn test_concentrated_kinds() {
        assert!(LoadKind::Maintenance.may_be_concentrated());
        assert!(!LoadKind::Dead.may_be_concentrated());
        assert!(!LoadKind::Wind.may_be_concentrated());
    }

    #[test]
    fn test_contribution_serialization() {
        let load = LoadContribution::point(LoadKind::Maintenance, 100.0, crate::units::LoadUnit::Kilogram);
        let json = serde_json::to_string(&load).unwrap();
        let roundtrip: LoadContribution = serde_json::from_str(&json).unwrap();
        assert_eq!(load, roundtrip);
    }

    #[test]
    fn test_pattern_hint_defaults_to_uniform() {
        let json = r#"{ "kind": "Dead", "magnitude": 1.0, "unit": "kN/m" }"#;
        let load: LoadContribution = serde_json::from_str(json).unwrap();
        assert_eq!(load.pattern_hint, LoadPattern::Uniform);
    }
}
