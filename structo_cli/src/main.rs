//! # Structo CLI Application
//!
//! Terminal interface for the steel member design engine. Prompts for a
//! purlin design, runs the full check workflow, and prints a report plus
//! the JSON result.

use std::io::{self, BufRead, Write};

use structo_core::calculations::{design_member, DesignInput, MemberType};
use structo_core::loads::{LoadContribution, LoadKind};
use structo_core::materials::CodeRegime;
use structo_core::units::LoadUnit;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Structo CLI - Steel Member Design");
    println!("=================================");
    println!();

    let span_m = prompt_f64("Enter purlin span (m) [6.0]: ", 6.0);
    let spacing_m = prompt_f64("Enter purlin spacing (m) [1.5]: ", 1.5);
    let chord_angle_deg = prompt_f64("Enter roof chord angle (deg) [15.0]: ", 15.0);
    let dead_kn_m = prompt_f64("Enter dead load (kN/m) [0.5]: ", 0.5);
    let live_kn_m = prompt_f64("Enter live load (kN/m) [1.0]: ", 1.0);
    let wind_kn_m2 = prompt_f64("Enter wind pressure (kN/m²) [0.7]: ", 0.7);
    let maintenance_kg = prompt_f64("Enter maintenance point load (kg) [100.0]: ", 100.0);

    println!();
    println!("Designing St 37 channel purlin to the Egyptian code...");
    println!();

    let input = DesignInput {
        label: Some("CLI-Demo".to_string()),
        span_m,
        code: CodeRegime::Egyptian,
        steel_grade: "St 37".to_string(),
        member_type: MemberType::Purlin,
        section_family: None,
        chord_angle_deg,
        tributary_width_m: spacing_m,
        loads: vec![
            LoadContribution::uniform(LoadKind::Dead, dead_kn_m, LoadUnit::KiloNewtonPerMeter),
            LoadContribution::uniform(LoadKind::Live, live_kn_m, LoadUnit::KiloNewtonPerMeter),
            LoadContribution::uniform(
                LoadKind::Wind,
                wind_kn_m2,
                LoadUnit::KiloNewtonPerSquareMeter,
            ),
            LoadContribution::point(LoadKind::Maintenance, maintenance_kg, LoadUnit::Kilogram),
        ],
    };

    match design_member(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  MEMBER DESIGN RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Span:        {:.2} m", result.span_m);
            println!("  Spacing:     {:.2} m", result.tributary_width_m);
            println!("  Chord angle: {:.1}°", result.chord_angle_deg);
            println!(
                "  Material:    {} ({}, Fy = {:.0} MPa)",
                result.steel_grade.name,
                result.code.display_name(),
                result.steel_grade.fy_mpa
            );
            println!();
            if let Some(case) = &result.critical_case {
                println!("Governing case: {}", case);
            }
            println!("Demand:");
            println!("  M_max = {:.2} kNm", result.moment_knm);
            println!("  V_max = {:.2} kN", result.shear_kn);
            println!("  δ_max = {:.2} mm", result.deflection_mm);
            println!();
            println!("Selected section: {}", result.section.name);
            println!();
            println!("Capacity Checks:");
            println!(
                "  Bending:     {:.2} ({:.2}/{:.2} kNm) {}",
                result.capacity.utilization,
                result.capacity.applied_moment_knm,
                result.capacity.moment_capacity_knm,
                status_icon(result.capacity.status.is_acceptable())
            );
            println!(
                "  Compactness: {} (flange {:.2}/{:.2}, web {:.2}/{:.2}) {}",
                result.compactness.classification,
                result.compactness.flange_ratio,
                result.compactness.flange_compact_limit,
                result.compactness.web_ratio,
                result.compactness.web_compact_limit,
                status_icon(result.compactness.status.is_acceptable())
            );
            match result.ltb.design_capacity_knm {
                Some(cap) => println!(
                    "  LTB:         {:.2} ({:.2}/{:.2} kNm, Lb = {:.2} m) {}",
                    result.ltb.utilization.unwrap_or(f64::INFINITY),
                    result.moment_knm,
                    cap,
                    result.ltb.unbraced_length_m,
                    status_icon(result.ltb.status.is_acceptable())
                ),
                None => println!("  LTB:         {}", result.ltb.status),
            }
            println!(
                "  Deflection:  {:.2} ({:.2}/{:.2} mm, L/{:.0}) {}",
                result.deflection.utilization,
                result.deflection.actual_mm,
                result.deflection.allowable_mm,
                result.deflection.limit_ratio,
                status_icon(result.deflection.status.is_acceptable())
            );
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {} ({})",
                if result.passes() { "PASS" } else { "FAIL" },
                result.overall_status
            );
            if result.catalog_exhausted {
                println!("  Catalog exhausted - heaviest section shown");
            }
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
