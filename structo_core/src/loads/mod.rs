//! Load aggregation and critical-combination selection
//!
//! The caller submits a complete list of [`LoadContribution`]s per design
//! request. This module normalizes them into a [`LoadSet`] of per-kind
//! linear loads (kN/m) plus the concentrated maintenance load (kN), and
//! selects the governing combination by comparing resulting moments.
//!
//! # Overview
//!
//! - [`LoadKind`] - physical load categories (D, L, W, M, A)
//! - [`LoadContribution`] - one immutable load entry from the caller
//! - [`LoadSet`] - normalized per-kind linear loads for one request
//! - [`Combination`] / [`critical_combination`] - governing-case selection
//!
//! # Example
//!
//! ```
//! use structo_core::loads::{LoadContribution, LoadKind, LoadSet, critical_combination};
//! use structo_core::units::LoadUnit;
//!
//! let contributions = vec![
//!     LoadContribution::uniform(LoadKind::Dead, 0.5, LoadUnit::KiloNewtonPerMeter),
//!     LoadContribution::uniform(LoadKind::Live, 1.0, LoadUnit::KiloNewtonPerMeter),
//!     LoadContribution::uniform(LoadKind::Wind, 0.7, LoadUnit::KiloNewtonPerSquareMeter),
//!     LoadContribution::point(LoadKind::Maintenance, 100.0, LoadUnit::Kilogram),
//! ];
//!
//! let loads = LoadSet::from_contributions(&contributions, 6.0, 1.5).unwrap();
//! let critical = critical_combination(&loads, 6.0);
//! assert_eq!(critical.combination, "Dead + Live + Wind");
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{critical_combination, enumerate_combinations, Combination, CriticalCase};
pub use load_types::{LoadContribution, LoadKind, LoadPattern};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::convert_to_linear_load;

/// Normalized loads for a single design request.
///
/// All distributed contributions have been converted to kN/m; the
/// maintenance load is kept concentrated in kN. Built once per invocation
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadSet {
    /// Dead load (kN/m)
    pub dead_kn_m: f64,

    /// Live load (kN/m)
    pub live_kn_m: f64,

    /// Wind load (kN/m)
    pub wind_kn_m: f64,

    /// Additional user loads (kN/m), folded into every combination
    pub additional_kn_m: f64,

    /// Concentrated maintenance load at midspan (kN)
    pub maintenance_point_kn: f64,
}

impl LoadSet {
    /// Aggregate caller contributions into a normalized load set.
    ///
    /// Conversion rules follow [`crate::units`]: mass becomes force, area
    /// loads use the tributary width, and concentrated loads of any kind
    /// other than maintenance distribute uniformly over the span. A
    /// concentrated maintenance contribution (point hint with a kN or kg
    /// unit) stays a midspan point load.
    ///
    /// Negative magnitudes are rejected; a maintenance point entry with a
    /// per-length or per-area unit is contradictory and also rejected.
    pub fn from_contributions(
        contributions: &[LoadContribution],
        span_m: f64,
        tributary_width_m: f64,
    ) -> CalcResult<Self> {
        let mut set = LoadSet::default();

        for (index, load) in contributions.iter().enumerate() {
            if load.magnitude < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("loads[{}].magnitude", index),
                    load.magnitude.to_string(),
                    format!("{} cannot be negative", load.kind.description()),
                ));
            }

            let concentrated = load.kind.may_be_concentrated()
                && load.pattern_hint == LoadPattern::PointCenter;

            if concentrated {
                if load.unit.is_linear() || load.unit.is_area() {
                    return Err(CalcError::invalid_input(
                        format!("loads[{}].unit", index),
                        load.unit.token(),
                        "A concentrated maintenance load must use a kN or kg unit",
                    ));
                }
                set.maintenance_point_kn += load.unit.to_force(load.magnitude);
                continue;
            }

            let linear =
                convert_to_linear_load(load.magnitude, load.unit, span_m, tributary_width_m)?;
            match load.kind {
                LoadKind::Dead => set.dead_kn_m += linear,
                LoadKind::Live => set.live_kn_m += linear,
                LoadKind::Wind => set.wind_kn_m += linear,
                LoadKind::Maintenance | LoadKind::Additional => set.additional_kn_m += linear,
            }
        }

        Ok(set)
    }

    /// Linear load for a kind (kN/m). Maintenance reports its
    /// span-distributed equivalent and therefore needs the span.
    pub fn linear(&self, kind: LoadKind, span_m: f64) -> f64 {
        match kind {
            LoadKind::Dead => self.dead_kn_m,
            LoadKind::Live => self.live_kn_m,
            LoadKind::Wind => self.wind_kn_m,
            LoadKind::Maintenance => self.maintenance_point_kn / span_m,
            LoadKind::Additional => self.additional_kn_m,
        }
    }

    /// True when every contribution is zero.
    ///
    /// This is a benign degenerate case: the engine proceeds with zero
    /// moment and selects the smallest catalog section rather than failing.
    pub fn is_all_zero(&self) -> bool {
        self.dead_kn_m == 0.0
            && self.live_kn_m == 0.0
            && self.wind_kn_m == 0.0
            && self.additional_kn_m == 0.0
            && self.maintenance_point_kn == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LoadUnit;

    #[test]
    fn test_aggregation_by_kind() {
        let contributions = vec![
            LoadContribution::uniform(LoadKind::Dead, 1.0, LoadUnit::KiloNewtonPerMeter),
            LoadContribution::uniform(LoadKind::Dead, 1.5, LoadUnit::KiloNewtonPerSquareMeter),
            LoadContribution::uniform(LoadKind::Live, 2.5, LoadUnit::KiloNewtonPerSquareMeter),
        ];
        let set = LoadSet::from_contributions(&contributions, 5.0, 1.0).unwrap();
        assert!((set.dead_kn_m - 2.5).abs() < 1e-12);
        assert!((set.live_kn_m - 2.5).abs() < 1e-12);
        assert_eq!(set.maintenance_point_kn, 0.0);
    }

    #[test]
    fn test_maintenance_point_stays_concentrated() {
        let contributions = vec![LoadContribution::point(
            LoadKind::Maintenance,
            100.0,
            LoadUnit::Kilogram,
        )];
        let set = LoadSet::from_contributions(&contributions, 6.0, 1.5).unwrap();
        assert!((set.maintenance_point_kn - 0.981).abs() < 1e-9);
        assert_eq!(set.additional_kn_m, 0.0);
    }

    #[test]
    fn test_supported_beam_reaction_distributes() {
        // A concentrated reaction from a supported beam enters as an
        // additional kN load and is spread over the span
        let contributions = vec![LoadContribution::uniform(
            LoadKind::Additional,
            10.0,
            LoadUnit::KiloNewton,
        )];
        let set = LoadSet::from_contributions(&contributions, 5.0, 1.0).unwrap();
        assert!((set.additional_kn_m - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_magnitude_rejected() {
        let contributions = vec![LoadContribution::uniform(
            LoadKind::Dead,
            -1.0,
            LoadUnit::KiloNewtonPerMeter,
        )];
        let result = LoadSet::from_contributions(&contributions, 5.0, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_concentrated_maintenance_with_linear_unit_rejected() {
        let contributions = vec![LoadContribution::point(
            LoadKind::Maintenance,
            1.0,
            LoadUnit::KiloNewtonPerMeter,
        )];
        let result = LoadSet::from_contributions(&contributions, 5.0, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_zero() {
        let set = LoadSet::from_contributions(&[], 5.0, 1.0).unwrap();
        assert!(set.is_all_zero());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let contributions = vec![
            LoadContribution::uniform(LoadKind::Wind, 0.7, LoadUnit::KiloNewtonPerSquareMeter),
        ];
        let set = LoadSet::from_contributions(&contributions, 6.0, 1.5).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let roundtrip: LoadSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, roundtrip);
    }
}
