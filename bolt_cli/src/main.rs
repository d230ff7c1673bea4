//! # BoltCalc CLI Application
//!
//! Terminal-based interface for fastener selection. Collects the joint
//! configuration on stdin, runs the selection engine, and prints the
//! recommendation together with a text rendering of the assembly stack.

use std::io::{self, BufRead, Write};

use bolt_core::config::{AssemblyConfiguration, HoleType};
use bolt_core::derating::TemperatureClass;
use bolt_core::selection::select;
use bolt_core::units::{FootPounds, Inches, Mm, NewtonMeters};

fn read_line() -> Option<String> {
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }
    match read_line() {
        Some(input) => input.parse().unwrap_or(default),
        None => default,
    }
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }
    match read_line().as_deref() {
        Some("y") | Some("Y") | Some("yes") => true,
        Some("n") | Some("N") | Some("no") => false,
        _ => default,
    }
}

fn prompt_index(prompt: &str, count: usize) -> usize {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return 0;
    }
    read_line()
        .and_then(|input| input.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .filter(|i| *i < count)
        .unwrap_or(0)
}

fn main() {
    println!("BoltCalc CLI - Fastener Selector");
    println!("================================");
    println!();

    for (i, hole) in HoleType::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, hole);
    }
    let hole_type = HoleType::ALL[prompt_index("Hole type [1]: ", HoleType::ALL.len())];

    let depth_label = match hole_type {
        HoleType::ThroughHole => "Plate thickness (mm) [10.0]: ",
        HoleType::BlindHole => "Hole depth (mm) [20.0]: ",
    };
    let depth_default = match hole_type {
        HoleType::ThroughHole => 10.0,
        HoleType::BlindHole => 20.0,
    };
    let depth_or_plate_mm = prompt_f64(depth_label, depth_default);

    println!();
    for (i, class) in TemperatureClass::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, class);
    }
    let temperature_class =
        TemperatureClass::ALL[prompt_index("Temperature class [1]: ", TemperatureClass::ALL.len())];

    let washer_under_head = prompt_bool("Washer under bolt head? (y/n) [n]: ", false);
    let washer_under_nut = match hole_type {
        HoleType::ThroughHole => prompt_bool("Washer under nut? (y/n) [n]: ", false),
        HoleType::BlindHole => false,
    };
    let washer_thickness_mm = prompt_f64("Washer thickness (mm) [2.0]: ", 2.0);
    let safety_allowance_mm = prompt_f64("Safety allowance (mm) [3.0]: ", 3.0);

    let config = AssemblyConfiguration {
        hole_type,
        depth_or_plate_mm,
        temperature_class,
        washer_under_head,
        washer_under_nut,
        washer_thickness_mm,
        safety_allowance_mm,
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        return;
    }

    println!();
    match select(&config) {
        Ok(rec) => {
            let length_in: Inches = Mm(rec.length_or_engagement_mm).into();
            let torque_ftlb: FootPounds = NewtonMeters(rec.torque_nm).into();

            println!("═══════════════════════════════════════");
            println!("  FASTENER RECOMMENDATION");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Hole type:   {}", config.hole_type);
            println!("  {}:  {:.1} mm", match hole_type {
                HoleType::ThroughHole => "Plate",
                HoleType::BlindHole => "Depth",
            }, config.depth_or_plate_mm);
            println!("  Temperature: {}", config.temperature_class);
            println!();
            println!("Recommendation:");
            println!("  Bolt:   {}", rec.bolt_description());
            if let Some(nut) = rec.nut_description() {
                println!("  Nut:    {}", nut);
            }
            match hole_type {
                HoleType::ThroughHole => println!(
                    "  Total Required Length: {:.0} mm ({:.2}\")",
                    rec.length_or_engagement_mm, length_in.value()
                ),
                HoleType::BlindHole => {
                    println!(
                        "  Thread Engagement Available: {:.2} mm ({:.2}\")",
                        rec.length_or_engagement_mm, length_in.value()
                    );
                    println!(
                        "  Minimum Engagement ({}): {:.1} mm",
                        rec.size,
                        rec.size.min_engagement_mm()
                    );
                }
            }
            println!("  Washer Thickness: {:.1} mm each", config.washer_thickness_mm);
            println!("  Safety Allowance: {:.1} mm", config.safety_allowance_mm);
            println!("  Temperature Adjustment Factor: {}", rec.applied_multiplier);
            println!(
                "  Recommended Torque: {:.0} Nm ({:.0} ft-lb)",
                rec.torque_nm,
                torque_ftlb.value()
            );
            println!();
            println!("Assembly stack (bottom to top):");
            for segment in rec.stack.segments() {
                println!(
                    "  {:<20} {:>6.1} mm  [{}]",
                    segment.kind.label(),
                    segment.thickness_mm,
                    segment.kind.color_hint()
                );
            }
            println!("  {:<20} {:>6.1} mm", "Total", rec.stack.total_height_mm());
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&rec) {
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
