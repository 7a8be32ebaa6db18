//! The `gabarito essay` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gabarito_core::essay;

pub fn execute(
    file: Option<PathBuf>,
    text: Option<String>,
    topic: String,
    format: String,
) -> Result<()> {
    let text = match (file, text) {
        (Some(path), _) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read essay from {}", path.display()))?,
        (None, Some(text)) => text,
        (None, None) => anyhow::bail!("provide the essay with --file or --text"),
    };

    let score = essay::evaluate(&text, &topic);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
        _ => {
            println!("Nível: {} ({} pontos)", score.level, score.score);
            println!("{}", score.message);
            println!();
            for line in &score.details {
                println!("  {line}");
            }
            println!();
            println!(
                "Palavras: {} | Frases: {} | Termos técnicos: {}",
                score.word_count, score.sentence_count, score.technical_term_count
            );
        }
    }

    Ok(())
}
