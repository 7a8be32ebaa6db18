//! The `gabarito validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(batch_path: PathBuf) -> Result<()> {
    let batches = if batch_path.is_dir() {
        gabarito_core::batch::load_batch_directory(&batch_path)?
    } else {
        vec![gabarito_core::batch::parse_batch(&batch_path)?]
    };

    let mut total_warnings = 0;

    for batch in &batches {
        println!(
            "Batch: {} ({} students, {} submissions)",
            batch.name,
            batch.students.len(),
            batch.math.len() + batch.essays.len() + batch.projects.len()
        );

        let warnings = gabarito_core::batch::validate_batch(batch);
        for w in &warnings {
            let prefix = w
                .student_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All batch files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
