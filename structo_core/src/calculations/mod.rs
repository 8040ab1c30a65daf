//! Calculation Engine
//!
//! Beam statics, the four capacity checks, catalog search, and the
//! top-level member design workflow.

pub mod beam_analysis;
pub mod checks;
pub mod member_design;
pub mod selector;

use serde::{Deserialize, Serialize};

use crate::materials::SectionFamily;

pub use checks::{
    check_capacity, check_compactness, check_deflection, check_ltb, CapacityCheck, CheckStatus,
    CompactnessCheck, DeflectionCheck, LtbCheck, MemberChecks, SectionClass,
};
pub use member_design::{design_member, DesignInput, DesignResult};
pub use selector::select_section;

/// Kind of member being designed.
///
/// The member type fixes the deflection limit and the default section
/// family; it does not change the strength checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MemberType {
    /// Horizontal floor framing, deflection limited to L/360
    #[default]
    FloorBeam,
    /// Roof framing on the slope, deflection limited to L/240
    Purlin,
}

impl MemberType {
    pub const ALL: [MemberType; 2] = [MemberType::FloorBeam, MemberType::Purlin];

    pub fn display_name(&self) -> &'static str {
        match self {
            MemberType::FloorBeam => "Floor Beam",
            MemberType::Purlin => "Purlin",
        }
    }

    /// Serviceability span-over-deflection ratio
    pub fn deflection_limit_ratio(&self) -> f64 {
        match self {
            MemberType::FloorBeam => 360.0,
            MemberType::Purlin => 240.0,
        }
    }

    /// Section family used when the input does not name one
    pub fn default_section_family(&self) -> SectionFamily {
        match self {
            MemberType::FloorBeam => SectionFamily::IBeam,
            MemberType::Purlin => SectionFamily::Channel,
        }
    }
}

impl std::fmt::Display for MemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
