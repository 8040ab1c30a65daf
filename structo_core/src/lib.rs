//! # structo_core - Steel Member Design Engine
//!
//! `structo_core` is the computational heart of Structo, sizing simply
//! supported floor beams and roof purlins against Egyptian and American
//! steel design codes. All inputs and outputs are JSON-serializable, so
//! the engine drops into CLIs, services, and report generators alike.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs deserialize, results serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No Panics**: Infeasible demands are reported, never unwrapped
//!
//! ## Quick Start
//!
//! ```rust
//! use structo_core::{design_member, DesignInput, MemberType};
//! use structo_core::loads::{LoadContribution, LoadKind};
//! use structo_core::materials::CodeRegime;
//! use structo_core::units::LoadUnit;
//!
//! let input = DesignInput {
//!     label: Some("B-1".to_string()),
//!     span_m: 5.0,
//!     code: CodeRegime::Egyptian,
//!     steel_grade: "St 37".to_string(),
//!     member_type: MemberType::FloorBeam,
//!     section_family: None,
//!     chord_angle_deg: 0.0,
//!     tributary_width_m: 1.0,
//!     loads: vec![
//!         LoadContribution::uniform(LoadKind::Dead, 2.5, LoadUnit::KiloNewtonPerMeter),
//!         LoadContribution::uniform(LoadKind::Live, 2.5, LoadUnit::KiloNewtonPerMeter),
//!     ],
//! };
//!
//! let result = design_member(&input).unwrap();
//! assert_eq!(result.section.name, "IPE 200");
//! assert!(result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam statics, capacity checks, and the design workflow
//! - [`loads`] - Load contributions, normalization, and combinations
//! - [`materials`] - Code regimes, steel grades, and section catalogs
//! - [`units`] - Load unit vocabulary and conversion
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    design_member, member_design::design_member_json, CheckStatus, DesignInput, DesignResult,
    MemberType,
};
pub use errors::{CalcError, CalcResult};
