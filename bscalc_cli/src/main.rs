//! # BSCalc Demonstration Driver
//!
//! Runs each design check with fixed example inputs and prints the results.
//! Design-rule failures are printed as labelled messages rather than
//! aborting the run.
//!
//! Set `RUST_LOG=debug` to see the intermediate values of each check.

use bscalc_core::calculations::rc_beam::{self, RcBeamInput};
use bscalc_core::design::{BeamDesignBS8110, SteelDesignBS5950};
use bscalc_core::loads::LoadingBS6399;
use bscalc_core::materials::{MaterialProperties, StrutCurve};
use bscalc_core::{section_properties, CalcError, CalcResult};

fn main() {
    env_logger::init();

    println!("BSCalc - British Standard Design Checks");
    println!("=======================================");
    println!();

    let material = MaterialProperties::new("C30", "B500", 200_000.0, 30_000.0);
    let beam = BeamDesignBS8110::new(&material);

    section("BS 8110 BEAM DESIGN (300 x 450 mm, 3H20)");
    let mu = beam.moment_capacity_singly_reinforced(300.0, 450.0, 942.0);
    report("Moment capacity", mu, "kN·m");
    let as_req = beam.required_reinforcement(150.0, 300.0, 450.0);
    report("Required steel (M = 150 kN·m)", as_req, "mm²");
    report("Shear capacity", beam.shear_capacity(300.0, 450.0, 942.0), "kN");
    let over = beam.moment_capacity_singly_reinforced(300.0, 450.0, 2500.0);
    report("Over-reinforced (As = 2500 mm²)", over, "kN·m");
    let doubly = beam.required_reinforcement(350.0, 300.0, 450.0);
    report("Required steel (M = 350 kN·m)", doubly, "mm²");
    println!();

    section("SECTION PROPERTIES (300 x 600 mm)");
    match section_properties(300.0, 600.0) {
        Ok(props) => {
            println!("  Area:               {:.0} mm²", props.area);
            println!("  Moment of inertia:  {:.3e} mm⁴", props.moment_of_inertia);
            println!("  Section modulus:    {:.3e} mm³", props.section_modulus);
            println!("  Radius of gyration: {:.1} mm", props.radius_of_gyration);
        }
        Err(e) => print_error(&e),
    }
    println!();

    section("BS 5950 STEEL DESIGN (S275)");
    let steel = SteelDesignBS5950::new("S275");
    report("Bending capacity (Z = 1320 cm³)", steel.bending_capacity(1320.0), "kN·m");
    let pc = steel.compression_capacity(11_400.0, StrutCurve::B);
    report("Compression capacity (A = 11400 mm²)", pc, "kN");
    println!();

    section("BS 6399 LOADING");
    let loading = LoadingBS6399::default();
    report("Office imposed load", loading.floor_loading("office", None), "kN/m²");
    report("Residential imposed load", loading.floor_loading("Residential", None), "kN/m²");
    let ult = loading.ultimate_load(2.0, 2.5);
    println!(
        "  Ultimate loads (Gk = 2.0, Qk = 2.5): 1.4Gk = {:.2}, 1.6Qk = {:.2} kN/m²",
        ult.dead, ult.live
    );
    println!();

    section("MEMBER CHECK");
    let input = RcBeamInput {
        label: "B-1".to_string(),
        width_mm: 300.0,
        effective_depth_mm: 450.0,
        steel_area_mm2: 942.0,
        design_moment_knm: 150.0,
        design_shear_kn: 60.0,
    };
    match rc_beam::calculate(&input, &beam) {
        Ok(result) => {
            for (name, unity) in [
                ("Bending", result.bending_unity),
                ("Steel", result.steel_unity),
                ("Shear", result.shear_unity),
            ] {
                let label = format!("{}:", name);
                println!("  {:<8} {:.2} {}", label, unity, status_icon(unity <= 1.0));
            }
            println!(
                "  RESULT: {} (governs: {})",
                if result.passes() { "PASS" } else { "FAIL" },
                result.governing_condition()
            );

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => print_error(&e),
    }
}

fn section(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
}

fn report(name: &str, value: CalcResult<f64>, unit: &str) {
    match value {
        Ok(v) => println!("  {}: {:.2} {}", name, v, unit),
        Err(e) => {
            print!("  {}: ", name);
            print_error(&e);
        }
    }
}

fn print_error(e: &CalcError) {
    match e.design_rule() {
        Some(rule) => println!("[DESIGN CHECK] {} - {}", rule, e),
        None => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(e) {
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
