//! Standard Section Catalogs
//!
//! Ordered tables of rolled steel section profiles, keyed by code regime
//! and section family. Egyptian designs draw from the European IPE (I-beam)
//! and UPN (channel) series; American designs draw from AISC W-shapes and
//! C-channels with properties converted to millimetres.
//!
//! Each catalog is sorted ascending by elastic section modulus Zx, which is
//! the capacity proxy the selector relies on: the first entry that passes
//! every check is the lightest adequate section.
//!
//! All values are static and read-only; section properties are never
//! mutated after lookup.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::CodeRegime;

/// Section family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SectionFamily {
    /// Rolled I-beam (IPE / W-shape) - typical for floor beams
    #[default]
    IBeam,
    /// Rolled channel (UPN / C-shape) - typical for purlins
    Channel,
}

impl SectionFamily {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionFamily::IBeam => "I-Beam",
            SectionFamily::Channel => "Channel",
        }
    }
}

impl std::fmt::Display for SectionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Geometric and section properties of a rolled steel profile.
///
/// Dimensions in mm, area in mm², Ix in mm⁴, Zx in mm³. Immutable once
/// sourced from a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Profile designation (e.g., "IPE 200", "UPN 160", "W12X26")
    pub name: String,

    /// Overall depth h (mm)
    pub height_mm: f64,

    /// Flange width b (mm)
    pub width_mm: f64,

    /// Web thickness tw (mm)
    pub web_thickness_mm: f64,

    /// Flange thickness tf (mm)
    pub flange_thickness_mm: f64,

    /// Cross-sectional area (mm²)
    pub area_mm2: f64,

    /// Moment of inertia about the strong axis (mm⁴)
    pub ix_mm4: f64,

    /// Elastic section modulus about the strong axis (mm³)
    pub zx_mm3: f64,

    /// Section family
    pub family: SectionFamily,
}

impl SectionProperties {
    /// Clear web depth between flanges (mm)
    pub fn web_depth_mm(&self) -> f64 {
        self.height_mm - 2.0 * self.flange_thickness_mm
    }

    /// Approximate weak-axis moment of inertia (mm⁴), from the two flange
    /// rectangles plus the web rectangle. Used by the simplified LTB check
    /// when a full Iy is not tabulated.
    pub fn iy_approx_mm4(&self) -> f64 {
        let flanges = 2.0 * self.flange_thickness_mm * self.width_mm.powi(3) / 12.0;
        let web = self.web_depth_mm() * self.web_thickness_mm.powi(3) / 12.0;
        flanges + web
    }

    /// Whether the profile carries the dimensions the LTB formula needs
    pub fn has_ltb_properties(&self) -> bool {
        self.width_mm > 0.0 && self.flange_thickness_mm > 0.0 && self.web_thickness_mm > 0.0
    }
}

impl std::fmt::Display for SectionProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.0} mm², Ix={:.3e} mm⁴, Zx={:.3e} mm³)",
            self.name, self.area_mm2, self.ix_mm4, self.zx_mm3
        )
    }
}

/// Build a catalog row from handbook values (dimensions mm, area cm²,
/// Ix cm⁴, Zx cm³), converting to base mm units.
fn row(
    name: &str,
    family: SectionFamily,
    h: f64,
    b: f64,
    tw: f64,
    tf: f64,
    area_cm2: f64,
    ix_cm4: f64,
    zx_cm3: f64,
) -> SectionProperties {
    SectionProperties {
        name: name.to_string(),
        height_mm: h,
        width_mm: b,
        web_thickness_mm: tw,
        flange_thickness_mm: tf,
        area_mm2: area_cm2 * 1.0e2,
        ix_mm4: ix_cm4 * 1.0e4,
        zx_mm3: zx_cm3 * 1.0e3,
        family,
    }
}

/// European IPE series (Euronorm 19-57), used for Egyptian-code I-beams
static IPE_SECTIONS: Lazy<Vec<SectionProperties>> = Lazy::new(|| {
    let f = SectionFamily::IBeam;
    vec![
        row("IPE 80", f, 80.0, 46.0, 3.8, 5.2, 7.64, 80.1, 20.0),
        row("IPE 100", f, 100.0, 55.0, 4.1, 5.7, 10.3, 171.0, 34.2),
        row("IPE 120", f, 120.0, 64.0, 4.4, 6.3, 13.2, 318.0, 53.0),
        row("IPE 140", f, 140.0, 73.0, 4.7, 6.9, 16.4, 541.0, 77.3),
        row("IPE 160", f, 160.0, 82.0, 5.0, 7.4, 20.1, 869.0, 108.7),
        row("IPE 180", f, 180.0, 91.0, 5.3, 8.0, 23.9, 1317.0, 146.0),
        row("IPE 200", f, 200.0, 100.0, 5.6, 8.5, 28.5, 1943.0, 194.0),
        row("IPE 220", f, 220.0, 110.0, 5.9, 9.2, 33.4, 2772.0, 252.0),
        row("IPE 240", f, 240.0, 120.0, 6.2, 9.8, 39.1, 3892.0, 324.0),
        row("IPE 270", f, 270.0, 135.0, 6.6, 10.2, 45.9, 5790.0, 429.0),
        row("IPE 300", f, 300.0, 150.0, 7.1, 10.7, 53.8, 8356.0, 557.0),
        row("IPE 330", f, 330.0, 160.0, 7.5, 11.5, 62.6, 11770.0, 713.0),
        row("IPE 360", f, 360.0, 170.0, 8.0, 12.7, 72.7, 16270.0, 904.0),
        row("IPE 400", f, 400.0, 180.0, 8.6, 13.5, 84.5, 23130.0, 1156.0),
        row("IPE 450", f, 450.0, 190.0, 9.4, 14.6, 98.8, 33740.0, 1500.0),
        row("IPE 500", f, 500.0, 200.0, 10.2, 16.0, 115.5, 48200.0, 1928.0),
        row("IPE 550", f, 550.0, 210.0, 11.1, 17.2, 134.4, 67120.0, 2441.0),
        row("IPE 600", f, 600.0, 220.0, 12.0, 19.0, 156.0, 92080.0, 3069.0),
    ]
});

/// European UPN channel series, used for Egyptian-code purlins
static UPN_SECTIONS: Lazy<Vec<SectionProperties>> = Lazy::new(|| {
    let f = SectionFamily::Channel;
    vec![
        row("UPN 80", f, 80.0, 45.0, 6.0, 8.0, 11.0, 106.0, 26.5),
        row("UPN 100", f, 100.0, 50.0, 6.0, 8.5, 13.5, 206.0, 41.2),
        row("UPN 120", f, 120.0, 55.0, 7.0, 9.0, 17.0, 364.0, 60.7),
        row("UPN 140", f, 140.0, 60.0, 7.0, 10.0, 20.4, 605.0, 86.4),
        row("UPN 160", f, 160.0, 65.0, 7.5, 10.5, 24.0, 925.0, 116.0),
        row("UPN 180", f, 180.0, 70.0, 8.0, 11.0, 28.0, 1350.0, 150.0),
        row("UPN 200", f, 200.0, 75.0, 8.5, 11.5, 32.2, 1910.0, 191.0),
        row("UPN 220", f, 220.0, 80.0, 9.0, 12.5, 37.4, 2690.0, 245.0),
        row("UPN 240", f, 240.0, 85.0, 9.5, 13.0, 42.3, 3600.0, 300.0),
        row("UPN 260", f, 260.0, 90.0, 10.0, 14.0, 48.3, 4820.0, 371.0),
        row("UPN 280", f, 280.0, 95.0, 10.0, 15.0, 53.3, 6280.0, 448.0),
        row("UPN 300", f, 300.0, 100.0, 10.0, 16.0, 58.8, 8030.0, 535.0),
    ]
});

/// AISC W-shapes (common beam sizes), metricated, for American-code I-beams
static W_SECTIONS: Lazy<Vec<SectionProperties>> = Lazy::new(|| {
    let f = SectionFamily::IBeam;
    vec![
        row("W6X9", f, 150.0, 100.0, 4.3, 5.5, 17.3, 683.0, 91.1),
        row("W8X10", f, 200.0, 100.0, 4.3, 5.2, 19.1, 1282.0, 128.0),
        row("W8X13", f, 203.0, 102.0, 5.8, 6.5, 24.8, 1648.0, 162.0),
        row("W10X12", f, 251.0, 101.0, 4.8, 5.3, 22.8, 2239.0, 179.0),
        row("W10X19", f, 260.0, 102.0, 6.4, 10.0, 36.3, 4008.0, 308.0),
        row("W12X19", f, 309.0, 102.0, 6.0, 8.9, 35.9, 5411.0, 349.0),
        row("W12X26", f, 310.0, 165.0, 5.8, 9.7, 49.4, 8491.0, 547.0),
        row("W14X30", f, 352.0, 171.0, 6.9, 9.8, 57.1, 12112.0, 688.0),
        row("W16X36", f, 403.0, 178.0, 7.5, 10.9, 68.4, 18647.0, 926.0),
        row("W18X40", f, 455.0, 153.0, 8.0, 13.3, 76.1, 25473.0, 1121.0),
        row("W21X50", f, 529.0, 166.0, 9.7, 13.6, 94.8, 40957.0, 1549.0),
        row("W24X62", f, 603.0, 179.0, 10.9, 15.0, 117.4, 64516.0, 2147.0),
    ]
});

/// AISC C-channels, metricated, for American-code purlins
static C_SECTIONS: Lazy<Vec<SectionProperties>> = Lazy::new(|| {
    let f = SectionFamily::Channel;
    vec![
        row("C3X4.1", f, 76.0, 36.0, 4.3, 6.9, 7.8, 69.1, 18.0),
        row("C4X5.4", f, 102.0, 40.0, 4.7, 7.5, 10.3, 160.0, 31.6),
        row("C5X6.7", f, 127.0, 44.0, 4.8, 8.1, 12.7, 312.0, 49.2),
        row("C6X8.2", f, 152.0, 49.0, 5.1, 8.7, 15.5, 545.0, 71.8),
        row("C8X11.5", f, 203.0, 57.0, 5.6, 9.9, 21.8, 1357.0, 133.0),
        row("C10X15.3", f, 254.0, 66.0, 6.1, 11.1, 29.0, 2805.0, 221.0),
        row("C12X20.7", f, 305.0, 75.0, 7.2, 12.7, 39.3, 5370.0, 352.0),
        row("C15X33.9", f, 381.0, 86.0, 10.2, 16.5, 64.3, 13111.0, 688.0),
    ]
});

/// Get the ordered catalog for a regime and family.
///
/// Catalogs are sorted ascending by Zx; the selector relies on this
/// ordering to stop at the first (lightest) adequate section.
///
/// # Example
/// ```
/// use structo_core::materials::{sections_for, CodeRegime, SectionFamily};
///
/// let catalog = sections_for(CodeRegime::Egyptian, SectionFamily::IBeam);
/// assert_eq!(catalog.first().unwrap().name, "IPE 80");
/// assert_eq!(catalog.last().unwrap().name, "IPE 600");
/// ```
pub fn sections_for(regime: CodeRegime, family: SectionFamily) -> &'static [SectionProperties] {
    match (regime, family) {
        (CodeRegime::Egyptian, SectionFamily::IBeam) => &IPE_SECTIONS,
        (CodeRegime::Egyptian, SectionFamily::Channel) => &UPN_SECTIONS,
        (CodeRegime::American, SectionFamily::IBeam) => &W_SECTIONS,
        (CodeRegime::American, SectionFamily::Channel) => &C_SECTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_nonempty() {
        for regime in CodeRegime::ALL {
            for family in [SectionFamily::IBeam, SectionFamily::Channel] {
                assert!(!sections_for(regime, family).is_empty());
            }
        }
    }

    #[test]
    fn test_catalogs_sorted_ascending_by_zx() {
        for regime in CodeRegime::ALL {
            for family in [SectionFamily::IBeam, SectionFamily::Channel] {
                let catalog = sections_for(regime, family);
                for pair in catalog.windows(2) {
                    assert!(
                        pair[0].zx_mm3 < pair[1].zx_mm3,
                        "{} should be lighter than {}",
                        pair[0].name,
                        pair[1].name
                    );
                }
            }
        }
    }

    #[test]
    fn test_unit_conversion_from_handbook_values() {
        let ipe200 = IPE_SECTIONS.iter().find(|s| s.name == "IPE 200").unwrap();
        // 1943 cm⁴ = 1.943e7 mm⁴, 194 cm³ = 1.94e5 mm³, 28.5 cm² = 2850 mm²
        assert!((ipe200.ix_mm4 - 1.943e7).abs() < 1.0);
        assert!((ipe200.zx_mm3 - 1.94e5).abs() < 1.0);
        assert!((ipe200.area_mm2 - 2850.0).abs() < 0.1);
    }

    #[test]
    fn test_families_are_consistent() {
        assert!(IPE_SECTIONS.iter().all(|s| s.family == SectionFamily::IBeam));
        assert!(UPN_SECTIONS.iter().all(|s| s.family == SectionFamily::Channel));
        assert!(C_SECTIONS.iter().all(|s| s.family == SectionFamily::Channel));
    }

    #[test]
    fn test_iy_approx() {
        let ipe180 = IPE_SECTIONS.iter().find(|s| s.name == "IPE 180").unwrap();
        // Flanges: 2 * 8.0 * 91³ / 12 ≈ 1.005e6 mm⁴ dominates the web term
        let iy = ipe180.iy_approx_mm4();
        assert!(iy > 1.0e6 && iy < 1.1e6);
    }

    #[test]
    fn test_ltb_properties_present() {
        assert!(IPE_SECTIONS.iter().all(|s| s.has_ltb_properties()));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let section = UPN_SECTIONS[0].clone();
        let json = serde_json::to_string(&section).unwrap();
        let roundtrip: SectionProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(section, roundtrip);
    }
}
