//! The `gabarito init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gabarito.toml
    if std::path::Path::new("gabarito.toml").exists() {
        println!("gabarito.toml already exists, skipping.");
    } else {
        std::fs::write("gabarito.toml", SAMPLE_CONFIG)?;
        println!("Created gabarito.toml");
    }

    // Create example batch
    std::fs::create_dir_all("turmas")?;
    let example_path = std::path::Path::new("turmas/exemplo.toml");
    if example_path.exists() {
        println!("turmas/exemplo.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BATCH)?;
        println!("Created turmas/exemplo.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit turmas/exemplo.toml with your class data");
    println!("  2. Run: gabarito validate --batch turmas/exemplo.toml");
    println!("  3. Run: gabarito grade --batch turmas/exemplo.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gabarito configuration

# Directory report files are written to
output_dir = "./gabarito-results"

# Default output format for `grade`: text, json, html, all
default_format = "text"

# Rows kept in the standings table
standings_limit = 10
"#;

const EXAMPLE_BATCH: &str = r#"[batch]
id = "turma-exemplo"
name = "Turma Exemplo"

[[students]]
id = "ana"
name = "Ana Souza"
school = "EM Dom Pedro II"
grade = "7ano"

[[students]]
id = "bia"
name = "Bia Lima"
school = "EM Tiradentes"
grade = "7ano"

# Drill results: tier label plus the number of correct answers
[[math]]
student = "ana"
tier = "medio"
correct = 4

[[math]]
student = "bia"
tier = "dificil"
correct = 2

[[essays]]
student = "ana"
topic = "tecnologia"
text = """
Primeiro, o computador executa cada algoritmo sobre os dados do sistema
porque o software foi construído para isso. Além disso, a internet conecta
a escola ao conhecimento digital, portanto o aprendizado se expande para
todos os alunos da turma.
"""

[[projects]]
student = "bia"
title = "Semáforo inteligente"
area = "Arduino"
tier = "intermediario"
description = """
Um semáforo com sensor de presença e código em loop que prioriza pedestres,
montado com uma biblioteca simples de temporização e uma função para cada
estado do circuito.
"""
"#;
