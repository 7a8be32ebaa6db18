//! The `gabarito project` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gabarito_core::project;

pub fn execute(
    file: Option<PathBuf>,
    description: Option<String>,
    area: String,
    tier: String,
    format: String,
) -> Result<()> {
    let description = match (file, description) {
        (Some(path), _) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read description from {}", path.display()))?,
        (None, Some(description)) => description,
        (None, None) => anyhow::bail!("provide the description with --file or --description"),
    };

    let score = project::grade(&description, &area, &tier);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
        _ => {
            println!("Nota: {}/100", score.score);
            println!("  Base: 50");
            println!("  Criatividade: +{}", score.originality_bonus);
            println!("  Complexidade ({}): +{}", tier, score.tier_bonus);
            println!("  Programação: +{}", score.technical_bonus);
        }
    }

    Ok(())
}
