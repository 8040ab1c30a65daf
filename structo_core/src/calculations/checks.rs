//! Capacity Checks
//!
//! The four limit-state checks run against every candidate section:
//! bending capacity, compactness classification, lateral-torsional
//! buckling, and deflection. Each check is a pure function of the section,
//! grade, and demand, and reports its own status and utilization; the
//! overall verdict is Safe iff every check accepts.
//!
//! An LTB check that cannot be completed for lack of section dimensions is
//! a recognized partial-result state ([`CheckStatus::Indeterminate`]), not
//! an error, and is treated as acceptable for the overall verdict.

use serde::{Deserialize, Serialize};

use super::MemberType;
use crate::loads::CriticalCase;
use crate::materials::{CodeRegime, SectionProperties, SteelGrade};

/// Outcome of a single limit-state check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Demand within capacity
    Safe,
    /// Demand exceeds capacity
    Unsafe,
    /// Check could not be completed for lack of section dimensions.
    /// Serialized with the legacy display string so report consumers keep
    /// matching it.
    #[serde(rename = "Cannot determine - missing section properties")]
    Indeterminate,
}

impl CheckStatus {
    /// Safe iff the condition holds
    pub fn from_condition(safe: bool) -> Self {
        if safe {
            CheckStatus::Safe
        } else {
            CheckStatus::Unsafe
        }
    }

    /// Whether this status allows the overall verdict to remain Safe.
    ///
    /// Indeterminate counts as acceptable: it signals missing data rather
    /// than a demonstrated failure. Flagged as a deliberate policy choice
    /// in DESIGN.md.
    pub fn is_acceptable(&self) -> bool {
        matches!(self, CheckStatus::Safe | CheckStatus::Indeterminate)
    }

    /// Display string (matches the serialized form)
    pub fn display_name(&self) -> &'static str {
        match self {
            CheckStatus::Safe => "Safe",
            CheckStatus::Unsafe => "Unsafe",
            CheckStatus::Indeterminate => "Cannot determine - missing section properties",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Compactness classification per the active code regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionClass {
    /// Both flange and web slenderness within compact limits
    Compact,
    /// At least one slenderness ratio exceeds its compact limit
    NonCompact,
}

impl std::fmt::Display for SectionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionClass::Compact => write!(f, "Compact"),
            SectionClass::NonCompact => write!(f, "Non-compact"),
        }
    }
}

/// Bending capacity check: M <= Zx * Fy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityCheck {
    pub status: CheckStatus,

    /// Section bending capacity Zx * Fy (kNm)
    pub moment_capacity_knm: f64,

    /// Applied moment (kNm)
    pub applied_moment_knm: f64,

    /// capacity / demand; infinite at zero moment
    pub safety_factor: f64,

    /// demand / capacity; must be <= 1.0
    pub utilization: f64,
}

/// Evaluate the bending capacity check.
pub fn check_capacity(
    section: &SectionProperties,
    grade: &SteelGrade,
    moment_knm: f64,
) -> CapacityCheck {
    // Zx [mm³] * Fy [N/mm²] = N·mm; 1e6 N·mm per kNm
    let capacity_knm = section.zx_mm3 * grade.fy_mpa / 1.0e6;
    let utilization = if capacity_knm > 0.0 {
        moment_knm / capacity_knm
    } else {
        f64::INFINITY
    };
    let safety_factor = if moment_knm > 0.0 {
        capacity_knm / moment_knm
    } else {
        f64::INFINITY
    };

    CapacityCheck {
        status: CheckStatus::from_condition(utilization <= 1.0),
        moment_capacity_knm: capacity_knm,
        applied_moment_knm: moment_knm,
        safety_factor,
        utilization,
    }
}

/// Compactness check: flange and web slenderness against compact limits.
///
/// Each axis reports its own status; the classification is Compact only
/// when both are within their limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactnessCheck {
    pub status: CheckStatus,
    pub classification: SectionClass,

    /// Half-flange width-to-thickness ratio (b/2)/tf
    pub flange_ratio: f64,
    /// Compact limit for the flange ratio
    pub flange_compact_limit: f64,
    pub flange_status: CheckStatus,

    /// Clear web height-to-thickness ratio (h - 2tf)/tw
    pub web_ratio: f64,
    /// Compact limit for the web ratio
    pub web_compact_limit: f64,
    pub web_status: CheckStatus,
}

/// Evaluate the compactness check for the active regime and grade.
pub fn check_compactness(
    section: &SectionProperties,
    grade: &SteelGrade,
    regime: CodeRegime,
) -> CompactnessCheck {
    let root = grade.slenderness_root();

    let flange_ratio = (section.width_mm / 2.0) / section.flange_thickness_mm;
    let flange_limit = regime.flange_compact_coefficient() * root;
    let flange_status = CheckStatus::from_condition(flange_ratio <= flange_limit);

    let web_ratio = section.web_depth_mm() / section.web_thickness_mm;
    let web_limit = regime.web_compact_coefficient() * root;
    let web_status = CheckStatus::from_condition(web_ratio <= web_limit);

    let compact = flange_status == CheckStatus::Safe && web_status == CheckStatus::Safe;

    CompactnessCheck {
        status: CheckStatus::from_condition(compact),
        classification: if compact {
            SectionClass::Compact
        } else {
            SectionClass::NonCompact
        },
        flange_ratio,
        flange_compact_limit: flange_limit,
        flange_status,
        web_ratio,
        web_compact_limit: web_limit,
        web_status,
    }
}

/// Lateral-torsional buckling check.
///
/// `critical_moment_knm` and the derived fields are `None` when the member
/// is fully braced (zero effective unbraced length) or the check is
/// indeterminate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtbCheck {
    pub status: CheckStatus,

    /// Effective unbraced length (m)
    pub unbraced_length_m: f64,

    /// Elastic critical buckling moment (kNm)
    pub critical_moment_knm: Option<f64>,

    /// Design capacity: min(bending capacity, Mcr / reduction) (kNm)
    pub design_capacity_knm: Option<f64>,

    /// demand / design capacity
    pub utilization: Option<f64>,
}

/// Evaluate the simplified LTB check.
///
/// The effective unbraced length is `L * sin(chord_angle)`: at zero chord
/// angle the compression flange is continuously restrained by the floor or
/// roof system, and restraint is lost as the chord angle departs from
/// zero. The elastic critical moment uses the weak-axis approximation
/// `Mcr = pi² * E * Iy / Lb² * h/2`, reduced by the regime's capacity
/// factor and capped by the in-plane bending capacity.
pub fn check_ltb(
    section: &SectionProperties,
    grade: &SteelGrade,
    regime: CodeRegime,
    moment_knm: f64,
    span_m: f64,
    chord_angle_deg: f64,
) -> LtbCheck {
    let unbraced_m = span_m * chord_angle_deg.to_radians().sin();

    if !section.has_ltb_properties() {
        return LtbCheck {
            status: CheckStatus::Indeterminate,
            unbraced_length_m: unbraced_m,
            critical_moment_knm: None,
            design_capacity_knm: None,
            utilization: None,
        };
    }

    let bending_capacity_knm = section.zx_mm3 * grade.fy_mpa / 1.0e6;

    if unbraced_m < 1.0e-9 {
        // Fully braced: LTB cannot govern, capacity equals bending capacity
        let utilization = if bending_capacity_knm > 0.0 {
            moment_knm / bending_capacity_knm
        } else {
            f64::INFINITY
        };
        return LtbCheck {
            status: CheckStatus::from_condition(utilization <= 1.0),
            unbraced_length_m: 0.0,
            critical_moment_knm: None,
            design_capacity_knm: Some(bending_capacity_knm),
            utilization: Some(utilization),
        };
    }

    let e_mpa = regime.elastic_modulus_mpa();
    let lb_mm = unbraced_m * 1000.0;
    let mcr_knm = std::f64::consts::PI.powi(2) * e_mpa * section.iy_approx_mm4()
        / lb_mm.powi(2)
        * (section.height_mm / 2.0)
        / 1.0e6;

    let design_capacity_knm =
        bending_capacity_knm.min(mcr_knm / regime.ltb_reduction_factor());
    let utilization = if design_capacity_knm > 0.0 {
        moment_knm / design_capacity_knm
    } else {
        f64::INFINITY
    };

    LtbCheck {
        status: CheckStatus::from_condition(utilization <= 1.0),
        unbraced_length_m: unbraced_m,
        critical_moment_knm: Some(mcr_knm),
        design_capacity_knm: Some(design_capacity_knm),
        utilization: Some(utilization),
    }
}

/// Deflection check against the member-type serviceability limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    pub status: CheckStatus,

    /// Computed maximum deflection (mm)
    pub actual_mm: f64,

    /// Allowable deflection span/ratio (mm)
    pub allowable_mm: f64,

    /// Span-over-deflection limit ratio (360 floor beams, 240 purlins)
    pub limit_ratio: f64,

    /// actual / allowable
    pub utilization: f64,
}

/// Evaluate the deflection check.
///
/// The limit ratio is a fixed design policy per member type, not a user
/// setting: L/360 for floor beams (live-load critical), L/240 for purlins.
pub fn check_deflection(actual_mm: f64, span_m: f64, member_type: MemberType) -> DeflectionCheck {
    let limit_ratio = member_type.deflection_limit_ratio();
    let allowable_mm = span_m * 1000.0 / limit_ratio;
    let utilization = actual_mm / allowable_mm;

    DeflectionCheck {
        status: CheckStatus::from_condition(utilization <= 1.0),
        actual_mm,
        allowable_mm,
        limit_ratio,
        utilization,
    }
}

/// The four checks for one candidate section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberChecks {
    pub capacity: CapacityCheck,
    pub compactness: CompactnessCheck,
    pub ltb: LtbCheck,
    pub deflection: DeflectionCheck,
}

impl MemberChecks {
    /// Run all four checks for a candidate section under the governing
    /// load case. Deflection is recomputed here from the case's load
    /// components and the candidate's Ix.
    pub fn evaluate(
        section: &SectionProperties,
        grade: &SteelGrade,
        regime: CodeRegime,
        critical: &CriticalCase,
        span_m: f64,
        chord_angle_deg: f64,
        member_type: MemberType,
    ) -> Self {
        let deflection_mm =
            critical.deflection_mm(span_m, regime.elastic_modulus_mpa(), section.ix_mm4);

        MemberChecks {
            capacity: check_capacity(section, grade, critical.moment_knm),
            compactness: check_compactness(section, grade, regime),
            ltb: check_ltb(
                section,
                grade,
                regime,
                critical.moment_knm,
                span_m,
                chord_angle_deg,
            ),
            deflection: check_deflection(deflection_mm, span_m, member_type),
        }
    }

    /// Overall verdict: Safe iff every check accepts
    /// (Indeterminate LTB counts as acceptable).
    pub fn overall_status(&self) -> CheckStatus {
        let all_ok = self.capacity.status.is_acceptable()
            && self.compactness.status.is_acceptable()
            && self.ltb.status.is_acceptable()
            && self.deflection.status.is_acceptable();
        CheckStatus::from_condition(all_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::LoadPattern;
    use crate::materials::{sections_for, steel_grade, SectionFamily};

    fn ipe200() -> SectionProperties {
        sections_for(CodeRegime::Egyptian, SectionFamily::IBeam)
            .iter()
            .find(|s| s.name == "IPE 200")
            .unwrap()
            .clone()
    }

    fn st37() -> SteelGrade {
        steel_grade(CodeRegime::Egyptian, "St 37").unwrap()
    }

    #[test]
    fn test_capacity_check_safe() {
        // IPE 200: Zx = 1.94e5 mm³, Fy = 240 MPa -> 46.56 kNm capacity
        let check = check_capacity(&ipe200(), &st37(), 20.0);
        assert_eq!(check.status, CheckStatus::Safe);
        assert!((check.moment_capacity_knm - 46.56).abs() < 0.01);
        assert!((check.utilization - 20.0 / 46.56).abs() < 1e-6);
        assert!((check.safety_factor - 46.56 / 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_capacity_check_unsafe() {
        let check = check_capacity(&ipe200(), &st37(), 50.0);
        assert_eq!(check.status, CheckStatus::Unsafe);
        assert!(check.utilization > 1.0);
    }

    #[test]
    fn test_capacity_zero_moment() {
        let check = check_capacity(&ipe200(), &st37(), 0.0);
        assert_eq!(check.status, CheckStatus::Safe);
        assert_eq!(check.utilization, 0.0);
        assert!(check.safety_factor.is_infinite());
    }

    #[test]
    fn test_compactness_rolled_section_is_compact() {
        // IPE 200, St 37, Egyptian: flange (100/2)/8.5 = 5.88 vs
        // 0.24 * sqrt(210000/240) = 7.10; web (200-17)/5.6 = 32.7 vs 81.9
        let check = check_compactness(&ipe200(), &st37(), CodeRegime::Egyptian);
        assert_eq!(check.classification, SectionClass::Compact);
        assert_eq!(check.status, CheckStatus::Safe);
        assert_eq!(check.flange_status, CheckStatus::Safe);
        assert_eq!(check.web_status, CheckStatus::Safe);
        assert!((check.flange_ratio - 5.882).abs() < 0.01);
        assert!((check.flange_compact_limit - 7.099).abs() < 0.01);
    }

    #[test]
    fn test_compactness_slender_flange_flags_axis() {
        let mut slender = ipe200();
        slender.flange_thickness_mm = 2.0;
        let check = check_compactness(&slender, &st37(), CodeRegime::Egyptian);
        assert_eq!(check.flange_status, CheckStatus::Unsafe);
        assert_eq!(check.classification, SectionClass::NonCompact);
        assert_eq!(check.status, CheckStatus::Unsafe);
        // Web status is independent of the flange
        assert_eq!(check.web_status, CheckStatus::Safe);
    }

    #[test]
    fn test_ltb_fully_braced_at_zero_chord_angle() {
        let check = check_ltb(&ipe200(), &st37(), CodeRegime::Egyptian, 20.0, 5.0, 0.0);
        assert_eq!(check.status, CheckStatus::Safe);
        assert_eq!(check.unbraced_length_m, 0.0);
        assert!(check.critical_moment_knm.is_none());
        assert!((check.design_capacity_knm.unwrap() - 46.56).abs() < 0.01);
    }

    #[test]
    fn test_ltb_reduces_capacity_with_chord_angle() {
        let braced = check_ltb(&ipe200(), &st37(), CodeRegime::Egyptian, 10.0, 5.0, 0.0);
        let sloped = check_ltb(&ipe200(), &st37(), CodeRegime::Egyptian, 10.0, 5.0, 30.0);
        assert!(sloped.unbraced_length_m > 0.0);
        assert!(sloped.critical_moment_knm.is_some());
        assert!(sloped.design_capacity_knm.unwrap() <= braced.design_capacity_knm.unwrap());
    }

    #[test]
    fn test_ltb_indeterminate_on_missing_dimensions() {
        let mut stripped = ipe200();
        stripped.width_mm = 0.0;
        stripped.flange_thickness_mm = 0.0;
        let check = check_ltb(&stripped, &st37(), CodeRegime::Egyptian, 20.0, 5.0, 15.0);
        assert_eq!(check.status, CheckStatus::Indeterminate);
        assert!(check.utilization.is_none());
        // Indeterminate is acceptable for the overall verdict
        assert!(check.status.is_acceptable());
    }

    #[test]
    fn test_indeterminate_status_wire_format() {
        let json = serde_json::to_string(&CheckStatus::Indeterminate).unwrap();
        assert_eq!(json, "\"Cannot determine - missing section properties\"");
        let roundtrip: CheckStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, CheckStatus::Indeterminate);
    }

    #[test]
    fn test_deflection_policy_diverges_only_in_ratio() {
        let beam = check_deflection(12.0, 5.0, MemberType::FloorBeam);
        let purlin = check_deflection(12.0, 5.0, MemberType::Purlin);
        assert_eq!(beam.limit_ratio, 360.0);
        assert_eq!(purlin.limit_ratio, 240.0);
        assert!((beam.allowable_mm - 5000.0 / 360.0).abs() < 1e-9);
        assert!((purlin.allowable_mm - 5000.0 / 240.0).abs() < 1e-9);
        assert_eq!(beam.actual_mm, purlin.actual_mm);
        // Same deflection can pass the purlin limit and fail the beam limit
        assert_eq!(beam.status, CheckStatus::Safe);
        assert_eq!(purlin.status, CheckStatus::Safe);
        let beam_tight = check_deflection(15.0, 5.0, MemberType::FloorBeam);
        let purlin_loose = check_deflection(15.0, 5.0, MemberType::Purlin);
        assert_eq!(beam_tight.status, CheckStatus::Unsafe);
        assert_eq!(purlin_loose.status, CheckStatus::Safe);
    }

    #[test]
    fn test_overall_status_requires_every_check() {
        let critical = CriticalCase {
            combination: "Dead + Live".to_string(),
            pattern: LoadPattern::Uniform,
            uniform_kn_m: 5.0,
            point_kn: 0.0,
            moment_knm: 15.625,
        };
        let checks = MemberChecks::evaluate(
            &ipe200(),
            &st37(),
            CodeRegime::Egyptian,
            &critical,
            5.0,
            0.0,
            MemberType::FloorBeam,
        );
        assert_eq!(checks.capacity.status, CheckStatus::Safe);
        assert_eq!(checks.deflection.status, CheckStatus::Safe);
        assert_eq!(checks.overall_status(), CheckStatus::Safe);
    }

    #[test]
    fn test_checks_serialization_roundtrip() {
        let check = check_deflection(10.0, 6.0, MemberType::Purlin);
        let json = serde_json::to_string(&check).unwrap();
        let roundtrip: DeflectionCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(check, roundtrip);
    }
}
