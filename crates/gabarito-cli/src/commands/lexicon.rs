//! The `gabarito lexicon` command.

use anyhow::Result;
use comfy_table::Table;

use gabarito_core::essay::{
    AI_TERMS, CONNECTIVES, EDUCATION_TERMS, ROBOTICS_TERMS, TECHNOLOGY_TERMS,
};
use gabarito_core::project::PROGRAMMING_TERMS;

pub fn execute() -> Result<()> {
    let mut vocabulary = Table::new();
    vocabulary.set_header(vec!["Categoria", "Termos"]);
    vocabulary.add_row(vec!["tecnologia".to_string(), TECHNOLOGY_TERMS.join(", ")]);
    vocabulary.add_row(vec!["educação".to_string(), EDUCATION_TERMS.join(", ")]);
    vocabulary.add_row(vec!["robótica".to_string(), ROBOTICS_TERMS.join(", ")]);
    vocabulary.add_row(vec!["ia".to_string(), AI_TERMS.join(", ")]);

    println!("Vocabulário técnico (redações):\n{vocabulary}");
    println!("\nConectivos: {}", CONNECTIVES.join(", "));
    println!(
        "\nTermos de programação (projetos): {}",
        PROGRAMMING_TERMS.join(", ")
    );

    Ok(())
}
