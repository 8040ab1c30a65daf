//! Simply-Supported Beam Analysis
//!
//! Closed-form maximum moment, shear, and deflection for a simply
//! supported span under one idealized load pattern.
//!
//! ## Closed forms
//!
//! | pattern          | M_max  | V_max | δ_max           |
//! |------------------|--------|-------|-----------------|
//! | uniform          | wL²/8  | wL/2  | 5wL⁴/(384EI)    |
//! | point at center  | PL/4   | P/2   | PL³/(48EI)      |
//!
//! ## Units
//!
//! Span in m, uniform loads in kN/m, point loads in kN. Moments come back
//! in kNm and shear in kN. Deflection works in N and mm internally (E in
//! MPa, Ix in mm⁴) and returns mm; conveniently, 1 kN/m is exactly 1 N/mm.
//!
//! Moment and shear need no section; deflection takes the candidate
//! section's Ix and is re-evaluated inside the selector loop for each
//! candidate.
//!
//! ## Example
//!
//! ```
//! use structo_core::calculations::beam_analysis::{max_moment_knm, max_shear_kn};
//! use structo_core::loads::LoadPattern;
//!
//! // 4 kN/m over 5 m: M = wL²/8 = 12.5 kNm, V = wL/2 = 10 kN
//! assert!((max_moment_knm(5.0, 4.0, LoadPattern::Uniform) - 12.5).abs() < 1e-12);
//! assert!((max_shear_kn(5.0, 4.0, LoadPattern::Uniform) - 10.0).abs() < 1e-12);
//! ```

use crate::loads::LoadPattern;

/// Maximum bending moment (kNm).
///
/// `magnitude` is kN/m for the uniform pattern and kN for the point
/// pattern.
pub fn max_moment_knm(span_m: f64, magnitude: f64, pattern: LoadPattern) -> f64 {
    match pattern {
        LoadPattern::Uniform => magnitude * span_m.powi(2) / 8.0,
        LoadPattern::PointCenter => magnitude * span_m / 4.0,
    }
}

/// Maximum shear force (kN).
pub fn max_shear_kn(span_m: f64, magnitude: f64, pattern: LoadPattern) -> f64 {
    match pattern {
        LoadPattern::Uniform => magnitude * span_m / 2.0,
        LoadPattern::PointCenter => magnitude / 2.0,
    }
}

/// Maximum midspan deflection (mm).
///
/// `e_mpa` is the elastic modulus (N/mm²) and `ix_mm4` the strong-axis
/// moment of inertia of the candidate section.
pub fn max_deflection_mm(
    span_m: f64,
    magnitude: f64,
    pattern: LoadPattern,
    e_mpa: f64,
    ix_mm4: f64,
) -> f64 {
    if ix_mm4 <= 0.0 || e_mpa <= 0.0 {
        return 0.0;
    }
    let span_mm = span_m * 1000.0;
    match pattern {
        LoadPattern::Uniform => {
            // w in kN/m equals w in N/mm
            let w_n_mm = magnitude;
            5.0 * w_n_mm * span_mm.powi(4) / (384.0 * e_mpa * ix_mm4)
        }
        LoadPattern::PointCenter => {
            let p_n = magnitude * 1000.0;
            p_n * span_mm.powi(3) / (48.0 * e_mpa * ix_mm4)
        }
    }
}
