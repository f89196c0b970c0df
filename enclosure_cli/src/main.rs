//! # Enclosure Studio CLI
//!
//! Terminal front end for the dimensioning and quoting engine. Describes a
//! layout in plain English, takes tight measurements, and prints the cut
//! list, hardware specification, and quote.

use std::io::{self, BufRead, Write};

use enclosure_core::design::EnclosureDesign;
use enclosure_core::hardware::standard_catalog;
use enclosure_core::layout::parse_description;
use enclosure_core::measure::{check_height, check_width, MeasurementInput};
use enclosure_core::quote::standard_price_book;

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt, &default.to_string())
        .parse()
        .unwrap_or(default)
}

fn main() {
    println!("Enclosure Studio - Dimensioning & Quoting");
    println!("=========================================");
    println!();

    let description = prompt_line(
        "Describe the enclosure [corner shower with door on the right]: ",
        "corner shower with door on the right",
    );
    let width_mm = prompt_f64("Tight opening width (mm) [900]: ", 900.0);
    let height_mm = prompt_f64("Tight opening height (mm) [2000]: ", 2000.0);

    for check in [check_width(width_mm), check_height(height_mm)] {
        if let Some(error) = check.error {
            println!("Warning: {}", error);
        }
    }

    let parsed = parse_description(&description);
    let mut design = EnclosureDesign::from_parsed(&parsed);
    let mounting = design.config.mounting;
    let panel_ids: Vec<String> = design.layout.panels.iter().map(|p| p.id.clone()).collect();
    for panel_id in &panel_ids {
        if let Err(e) = design.set_measurement(
            panel_id,
            MeasurementInput::new(width_mm, height_mm, mounting),
        ) {
            eprintln!("Error: {}", e);
            return;
        }
    }

    match design.derive(standard_catalog(), standard_price_book()) {
        Ok(derivation) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  CUT LIST");
            println!("═══════════════════════════════════════");
            for panel in &derivation.deductions {
                let r = &panel.result;
                println!(
                    "  {:<14} {:.0} x {:.0} mm  ({:.1} kg)",
                    panel.panel_id, r.glass_width_mm, r.glass_height_mm, r.weight_kg
                );
                for note in &r.notes {
                    println!("    - {}", note);
                }
            }

            println!();
            println!("═══════════════════════════════════════");
            println!("  HARDWARE");
            println!("═══════════════════════════════════════");
            match &derivation.hinge {
                Some(selection) => {
                    println!(
                        "  Hinges: {} (est. door weight {:.1} kg)",
                        selection.brand, selection.estimated_weight_kg
                    );
                    for seal in &derivation.seals {
                        println!("  Seal:   {}", seal.seal_type);
                    }
                }
                None => println!("  No door hardware (fixed screen)"),
            }
            for warning in &derivation.warnings {
                println!("  WARNING: {}", warning);
            }

            println!();
            println!("═══════════════════════════════════════");
            println!("  QUOTE");
            println!("═══════════════════════════════════════");
            for item in &derivation.quote.items {
                println!(
                    "  {:<34} {:>6.2} {:<4} @ £{:>7.2}  £{:>8.2}",
                    item.description, item.quantity, item.unit, item.unit_price, item.total
                );
            }
            println!("  {:<52} £{:>8.2}", "Subtotal", derivation.quote.subtotal);
            println!("  {:<52} £{:>8.2}", "VAT (20%)", derivation.quote.vat);
            println!("  {:<52} £{:>8.2}", "Total", derivation.quote.total);
            println!(
                "  Valid until {}",
                derivation.quote.valid_until.format("%Y-%m-%d")
            );

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&derivation) {
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
