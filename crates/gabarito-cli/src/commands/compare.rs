//! The `gabarito compare` command.

use std::path::PathBuf;

use anyhow::Result;

use gabarito_core::report::ClassReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    min_delta: u32,
    fail_on_setback: bool,
    format: String,
) -> Result<()> {
    let baseline = ClassReport::load_json(&baseline_path)?;
    let current = ClassReport::load_json(&current_path)?;

    let progress = current.compare(&baseline, min_delta);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", progress.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} advances, {} setbacks, {} unchanged",
                progress.advances.len(),
                progress.setbacks.len(),
                progress.unchanged
            );

            if !progress.advances.is_empty() {
                println!("\nAdvances:");
                for p in &progress.advances {
                    println!(
                        "  {} {} -> {} (+{})",
                        p.name, p.baseline_points, p.current_points, p.delta
                    );
                }
            }

            if !progress.setbacks.is_empty() {
                println!("\nSetbacks:");
                for p in &progress.setbacks {
                    println!(
                        "  {} {} -> {} ({})",
                        p.name, p.baseline_points, p.current_points, p.delta
                    );
                }
            }

            if !progress.new_students.is_empty() {
                println!("\n{} new student(s)", progress.new_students.len());
            }
            if !progress.departed_students.is_empty() {
                println!("{} departed student(s)", progress.departed_students.len());
            }
        }
    }

    if fail_on_setback && progress.has_setbacks() {
        std::process::exit(1);
    }

    Ok(())
}
