//! # Materials
//!
//! Steel grade tables and code-regime constants.
//!
//! The engine designs to one of two code regimes: the Egyptian code
//! (ECP 205) or the American code (AISC 360, allowable-stress form).
//! Each regime carries its own elastic modulus, compactness-limit
//! coefficients, and LTB capacity reduction factor, and its own fixed
//! table of steel grades.
//!
//! - [`CodeRegime`] - Egyptian vs American design code
//! - [`SteelGrade`] - named grade with yield stress
//! - [`sections`] - standard section catalogs per regime and family

pub mod sections;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use sections::{SectionFamily, SectionProperties, sections_for};

/// Design code regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CodeRegime {
    /// Egyptian Code of Practice for steel construction (ECP 205)
    #[default]
    Egyptian,
    /// American code (AISC 360)
    American,
}

impl CodeRegime {
    /// Both regimes for iteration
    pub const ALL: [CodeRegime; 2] = [CodeRegime::Egyptian, CodeRegime::American];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeRegime::Egyptian => "Egyptian Code",
            CodeRegime::American => "American Code",
        }
    }

    /// Elastic modulus of structural steel (MPa = N/mm²)
    pub fn elastic_modulus_mpa(&self) -> f64 {
        match self {
            CodeRegime::Egyptian => 210_000.0,
            CodeRegime::American => 200_000.0,
        }
    }

    /// Compact limit coefficient for the flange slenderness check.
    ///
    /// The compact limit is `coefficient * sqrt(E / Fy)` applied to the
    /// half-flange ratio (b/2)/tf. Egyptian value re-expresses the ECP 205
    /// rolled-section limit in sqrt(E/Fy) form; American value is AISC 360
    /// Table B4.1b case 10.
    pub fn flange_compact_coefficient(&self) -> f64 {
        match self {
            CodeRegime::Egyptian => 0.24,
            CodeRegime::American => 0.38,
        }
    }

    /// Compact limit coefficient for the web slenderness check,
    /// applied to (h - 2*tf)/tw.
    pub fn web_compact_coefficient(&self) -> f64 {
        match self {
            CodeRegime::Egyptian => 2.77,
            CodeRegime::American => 3.76,
        }
    }

    /// Capacity reduction factor applied to the elastic LTB critical moment.
    ///
    /// Egyptian: 1/0.58 in allowable-stress form. American: Omega_b = 1.67.
    pub fn ltb_reduction_factor(&self) -> f64 {
        match self {
            CodeRegime::Egyptian => 1.72,
            CodeRegime::American => 1.67,
        }
    }

    /// The fixed steel grade table for this regime
    pub fn steel_grades(&self) -> &'static [SteelGrade] {
        match self {
            CodeRegime::Egyptian => &EGYPTIAN_STEEL_GRADES,
            CodeRegime::American => &AMERICAN_STEEL_GRADES,
        }
    }
}

impl std::fmt::Display for CodeRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A structural steel grade
///
/// Grades are fixed per regime; a grade is valid only within its own
/// regime's table. Grades serialize for result echoes but are never
/// deserialized; inputs reference a grade by name and the engine resolves
/// it against the regime's table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SteelGrade {
    /// Grade designation (e.g., "St 37", "A36")
    pub name: &'static str,

    /// Yield stress Fy (MPa = N/mm²)
    pub fy_mpa: f64,

    /// The regime this grade belongs to
    pub regime: CodeRegime,
}

impl SteelGrade {
    /// Bending capacity slenderness parameter sqrt(E/Fy) for this grade
    pub fn slenderness_root(&self) -> f64 {
        (self.regime.elastic_modulus_mpa() / self.fy_mpa).sqrt()
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Fy = {} MPa)", self.name, self.fy_mpa)
    }
}

/// Egyptian steel grades (ECP 205)
pub const EGYPTIAN_STEEL_GRADES: [SteelGrade; 3] = [
    SteelGrade { name: "St 37", fy_mpa: 240.0, regime: CodeRegime::Egyptian },
    SteelGrade { name: "St 44", fy_mpa: 280.0, regime: CodeRegime::Egyptian },
    SteelGrade { name: "St 52", fy_mpa: 360.0, regime: CodeRegime::Egyptian },
];

/// American steel grades (ASTM)
pub const AMERICAN_STEEL_GRADES: [SteelGrade; 3] = [
    SteelGrade { name: "A36", fy_mpa: 250.0, regime: CodeRegime::American },
    SteelGrade { name: "A572 Gr. 50", fy_mpa: 345.0, regime: CodeRegime::American },
    SteelGrade { name: "A992", fy_mpa: 345.0, regime: CodeRegime::American },
];

/// Look up a steel grade by name within a regime's table.
///
/// Matching is case-insensitive. A grade name from the other regime's
/// table is a [`CalcError::GradeNotFound`], enforcing the invariant that
/// a grade belongs to its regime.
///
/// # Example
/// ```
/// use structo_core::materials::{steel_grade, CodeRegime};
///
/// let grade = steel_grade(CodeRegime::Egyptian, "st 37").unwrap();
/// assert_eq!(grade.fy_mpa, 240.0);
/// assert!(steel_grade(CodeRegime::Egyptian, "A36").is_err());
/// ```
pub fn steel_grade(regime: CodeRegime, name: &str) -> CalcResult<SteelGrade> {
    regime
        .steel_grades()
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(name.trim()))
        .copied()
        .ok_or_else(|| CalcError::grade_not_found(name, regime.display_name()))
}
