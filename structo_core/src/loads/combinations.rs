//! Governing load combination selection
//!
//! The engine considers a fixed enumeration of physically meaningful
//! simultaneous-load scenarios (engine policy, not code-mandated factor
//! combinations) and picks the one producing the maximum bending moment.
//!
//! Each [`Combination`] carries an explicit set of included load kinds and
//! a load pattern; nothing is inferred from display names. Additional
//! user-supplied loads are folded into every combination's linear sum.
//!
//! ## Tie-break
//!
//! Comparison is strict `>`, so with equal moments the earlier-enumerated
//! combination wins. The ordering below is therefore part of the contract:
//! with zero wind, "Dead + Live" is reported rather than
//! "Dead + Live + Wind".

use serde::{Deserialize, Serialize};

use super::load_types::{LoadKind, LoadPattern};
use super::LoadSet;
use crate::calculations::beam_analysis;

/// A named load combination: which kinds act together, and in what pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    /// Display name (e.g., "Dead + Live + Wind")
    pub name: &'static str,

    /// Load kinds included in this combination
    pub kinds: &'static [LoadKind],

    /// Governing spatial pattern for this combination
    pub pattern: LoadPattern,
}

impl Combination {
    /// Resolve this combination against a load set.
    ///
    /// Returns `(uniform_kn_m, point_kn)`. Additional loads are always part
    /// of the uniform component. A maintenance load included under a
    /// uniform pattern is distributed over the span; under the point
    /// pattern it stays concentrated.
    pub fn resolve(&self, loads: &LoadSet, span_m: f64) -> (f64, f64) {
        let mut uniform = loads.additional_kn_m;
        let mut point = 0.0;

        for kind in self.kinds {
            if *kind == LoadKind::Maintenance && self.pattern == LoadPattern::PointCenter {
                point += loads.maintenance_point_kn;
            } else {
                uniform += loads.linear(*kind, span_m);
            }
        }
        (uniform, point)
    }

    /// Maximum midspan moment (kNm) this combination produces, by
    /// superposition of the uniform and concentrated components.
    pub fn moment_knm(&self, loads: &LoadSet, span_m: f64) -> f64 {
        let (uniform, point) = self.resolve(loads, span_m);
        beam_analysis::max_moment_knm(span_m, uniform, LoadPattern::Uniform)
            + beam_analysis::max_moment_knm(span_m, point, LoadPattern::PointCenter)
    }
}

/// The fixed combination enumeration, in tie-break order.
pub fn enumerate_combinations() -> &'static [Combination] {
    const COMBINATIONS: [Combination; 4] = [
        Combination {
            name: "Dead + Live",
            kinds: &[LoadKind::Dead, LoadKind::Live],
            pattern: LoadPattern::Uniform,
        },
        Combination {
            name: "Dead + Live + Wind",
            kinds: &[LoadKind::Dead, LoadKind::Live, LoadKind::Wind],
            pattern: LoadPattern::Uniform,
        },
        Combination {
            name: "Maintenance (point load)",
            kinds: &[LoadKind::Maintenance],
            pattern: LoadPattern::PointCenter,
        },
        Combination {
            name: "Dead + Live + Maintenance (distributed)",
            kinds: &[LoadKind::Dead, LoadKind::Live, LoadKind::Maintenance],
            pattern: LoadPattern::Uniform,
        },
    ];
    &COMBINATIONS
}

/// The governing combination for one design request.
///
/// Carries the resolved load components so downstream stages (shear,
/// per-candidate deflection) never recompute the combination logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalCase {
    /// Name of the governing combination
    pub combination: String,

    /// Governing load pattern
    pub pattern: LoadPattern,

    /// Uniform component (kN/m), additional loads included
    pub uniform_kn_m: f64,

    /// Concentrated midspan component (kN)
    pub point_kn: f64,

    /// Maximum bending moment (kNm)
    pub moment_knm: f64,
}

impl CriticalCase {
    /// Maximum shear force (kN) for the governing case
    pub fn shear_kn(&self, span_m: f64) -> f64 {
        beam_analysis::max_shear_kn(span_m, self.uniform_kn_m, LoadPattern::Uniform)
            + beam_analysis::max_shear_kn(span_m, self.point_kn, LoadPattern::PointCenter)
    }

    /// Maximum deflection (mm) for the governing case on a candidate
    /// section, by superposition.
    pub fn deflection_mm(&self, span_m: f64, e_mpa: f64, ix_mm4: f64) -> f64 {
        beam_analysis::max_deflection_mm(span_m, self.uniform_kn_m, LoadPattern::Uniform, e_mpa, ix_mm4)
            + beam_analysis::max_deflection_mm(
                span_m,
                self.point_kn,
                LoadPattern::PointCenter,
                e_mpa,
                ix_mm4,
            )
    }
}

/// Select the combination producing the maximum moment.
///
/// An all-zero load set is benign: every combination evaluates to zero
/// moment and the first-enumerated one ("Dead + Live") is reported, so the
/// design run proceeds with zero demand rather than aborting.
pub fn critical_combination(loads: &LoadSet, span_m: f64) -> CriticalCase {
    let mut critical: Option<CriticalCase> = None;

    for combination in enumerate_combinations() {
        let (uniform, point) = combination.resolve(loads, span_m);
        let moment = combination.moment_knm(loads, span_m);

        let is_new_max = match &critical {
            Some(current) => moment > current.moment_knm,
            None => true,
        };
        if is_new_max {
            critical = Some(CriticalCase {
                combination: combination.name.to_string(),
                pattern: combination.pattern,
                uniform_kn_m: uniform,
                point_kn: point,
                moment_knm: moment,
            });
        }
    }

    // The enumeration is non-empty, so the option is always populated.
    critical.unwrap_or(CriticalCase {
        combination: "Dead + Live".to_string(),
        pattern: LoadPattern::Uniform,
        uniform_kn_m: 0.0,
        point_kn: 0.0,
        moment_knm: 0.0,
    })
}
