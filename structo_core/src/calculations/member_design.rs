//! Member Design
//!
//! The top-level workflow: validate a design request, normalize its loads,
//! find the governing load combination, and scan the section catalog for
//! the lightest passing section. The result echoes the request, reports
//! the governing internal forces, and carries every check in full so a
//! report can be rendered without re-running the engine.
//!
//! # JSON Input Example
//! ```json
//! {
//!   "label": "Roof purlin P-1",
//!   "span_m": 6.0,
//!   "code": "Egyptian",
//!   "steel_grade": "St 37",
//!   "member_type": "Purlin",
//!   "chord_angle_deg": 15.0,
//!   "tributary_width_m": 1.5,
//!   "loads": [
//!     { "kind": "Dead", "magnitude": 0.5, "unit": "kN/m" },
//!     { "kind": "Live", "magnitude": 1.0, "unit": "kN/m" },
//!     { "kind": "Wind", "magnitude": 0.7, "unit": "kN/m2" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::checks::{CapacityCheck, CheckStatus, CompactnessCheck, DeflectionCheck, LtbCheck};
use super::selector::select_section;
use super::MemberType;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{critical_combination, LoadContribution, LoadSet};
use crate::materials::{steel_grade, CodeRegime, SectionFamily, SectionProperties, SteelGrade};

fn default_tributary_width() -> f64 {
    1.0
}

/// A single member design request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Free-form member tag carried through to the result
    #[serde(default)]
    pub label: Option<String>,

    /// Simply supported span (m)
    pub span_m: f64,

    /// Design code regime
    #[serde(default)]
    pub code: CodeRegime,

    /// Steel grade name, resolved against the regime's grade table
    pub steel_grade: String,

    #[serde(default)]
    pub member_type: MemberType,

    /// Section family to search; defaults per member type when omitted
    #[serde(default)]
    pub section_family: Option<SectionFamily>,

    /// Roof slope for purlins (degrees); zero for floor beams
    #[serde(default)]
    pub chord_angle_deg: f64,

    /// Width of the strip each area load acts over (m)
    #[serde(default = "default_tributary_width")]
    pub tributary_width_m: f64,

    /// Load contributions in any supported unit
    pub loads: Vec<LoadContribution>,
}

impl DesignInput {
    /// Validate the request before any calculation.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "span must be a positive number",
            ));
        }
        if !self.chord_angle_deg.is_finite()
            || self.chord_angle_deg < 0.0
            || self.chord_angle_deg >= 90.0
        {
            return Err(CalcError::invalid_input(
                "chord_angle_deg",
                self.chord_angle_deg.to_string(),
                "chord angle must be in [0, 90) degrees",
            ));
        }
        if !self.tributary_width_m.is_finite() || self.tributary_width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "tributary_width_m",
                self.tributary_width_m.to_string(),
                "tributary width must be a positive number",
            ));
        }
        if self.steel_grade.trim().is_empty() {
            return Err(CalcError::invalid_input(
                "steel_grade",
                self.steel_grade.as_str(),
                "steel grade name must not be empty",
            ));
        }
        for load in &self.loads {
            if !load.magnitude.is_finite() || load.magnitude < 0.0 {
                return Err(CalcError::invalid_input(
                    "loads",
                    load.magnitude.to_string(),
                    format!("{} load magnitude must be non-negative", load.kind.code()),
                ));
            }
        }
        Ok(())
    }

    /// Section family to search, honoring the member-type default
    pub fn effective_section_family(&self) -> SectionFamily {
        self.section_family
            .unwrap_or_else(|| self.member_type.default_section_family())
    }
}

/// Complete design result for one member.
///
/// Serializes to the report JSON; not deserializable because the grade
/// echo borrows from the static grade tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignResult {
    // Request echo
    pub label: Option<String>,
    pub member_type: MemberType,
    pub code: CodeRegime,
    pub steel_grade: SteelGrade,
    pub section_family: SectionFamily,
    pub span_m: f64,
    pub chord_angle_deg: f64,
    pub tributary_width_m: f64,

    /// Name of the governing load combination; reported for purlins,
    /// where wind and maintenance cases compete
    pub critical_case: Option<String>,

    /// Governing design moment (kNm)
    pub moment_knm: f64,

    /// Governing design shear (kN)
    pub shear_kn: f64,

    /// Maximum deflection of the selected section (mm)
    pub deflection_mm: f64,

    /// Selected (or fallback) section
    pub section: SectionProperties,

    pub capacity: CapacityCheck,
    pub compactness: CompactnessCheck,
    pub ltb: LtbCheck,
    pub deflection: DeflectionCheck,

    pub overall_status: CheckStatus,

    /// True when no cataloged section passed and the heaviest one is
    /// reported with its failing checks
    pub catalog_exhausted: bool,
}

impl DesignResult {
    /// Whether the design is usable as-is
    pub fn passes(&self) -> bool {
        self.overall_status == CheckStatus::Safe && !self.catalog_exhausted
    }

    /// Largest utilization across the evaluated checks
    pub fn governing_utilization(&self) -> f64 {
        let mut governing = self.capacity.utilization.max(self.deflection.utilization);
        if let Some(u) = self.ltb.utilization {
            governing = governing.max(u);
        }
        governing
    }
}

/// Run the full design workflow for one member.
///
/// Validation and grade lookup happen before any arithmetic, so a bad
/// request never produces a partial result.
pub fn design_member(input: &DesignInput) -> CalcResult<DesignResult> {
    input.validate()?;

    let grade = steel_grade(input.code, &input.steel_grade)?;
    let loads = LoadSet::from_contributions(&input.loads, input.span_m, input.tributary_width_m)?;
    let critical = critical_combination(&loads, input.span_m);
    let family = input.effective_section_family();

    let selection = select_section(
        &critical,
        input.span_m,
        &grade,
        input.code,
        family,
        input.chord_angle_deg,
        input.member_type,
    )?;

    let overall_status = selection.checks.overall_status();
    let critical_case = match input.member_type {
        MemberType::Purlin => Some(critical.combination.clone()),
        MemberType::FloorBeam => None,
    };

    Ok(DesignResult {
        label: input.label.clone(),
        member_type: input.member_type,
        code: input.code,
        steel_grade: grade,
        section_family: family,
        span_m: input.span_m,
        chord_angle_deg: input.chord_angle_deg,
        tributary_width_m: input.tributary_width_m,
        critical_case,
        moment_knm: critical.moment_knm,
        shear_kn: critical.shear_kn(input.span_m),
        deflection_mm: selection.checks.deflection.actual_mm,
        section: selection.section,
        capacity: selection.checks.capacity,
        compactness: selection.checks.compactness,
        ltb: selection.checks.ltb,
        deflection: selection.checks.deflection,
        overall_status,
        catalog_exhausted: selection.catalog_exhausted,
    })
}

/// JSON-in, JSON-out wrapper around [`design_member`].
///
/// Always returns a JSON string: the result on success, or an error
/// object `{"error": ..., "error_code": ...}` on failure.
pub fn design_member_json(input_json: &str) -> String {
    let outcome = serde_json::from_str::<DesignInput>(input_json)
        .map_err(|e| CalcError::invalid_input("input", input_json, e.to_string()))
        .and_then(|input| design_member(&input));

    match outcome {
        Ok(result) => serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
            format!(
                "{{\"error\": \"serialization failed: {}\", \"error_code\": \"INTERNAL_ERROR\"}}",
                e
            )
        }),
        Err(err) => serde_json::json!({
            "error": err.to_string(),
            "error_code": err.error_code(),
        })
        .to_string(),
    }
}
