//! The `gabarito drill` command.

use anyhow::Result;
use comfy_table::Table;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gabarito_core::arithmetic;
use gabarito_core::model::Tier;

pub fn execute(tier: String, count: usize, seed: Option<u64>, show_answers: bool) -> Result<()> {
    let tier = Tier::from_label(&tier);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut table = Table::new();
    let mut header = vec!["#", "Questão", "Pontos"];
    if show_answers {
        header.push("Resposta");
    }
    table.set_header(header);

    for i in 1..=count {
        let question = arithmetic::generate(tier, &mut rng);
        let mut row = vec![
            i.to_string(),
            question.prompt(),
            question.point_value.to_string(),
        ];
        if show_answers {
            row.push(question.expected_answer.to_string());
        }
        table.add_row(row);
    }

    println!("Nível: {tier}");
    println!("{table}");

    Ok(())
}
