//! The `gabarito grade` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gabarito_core::batch::{self, Batch};
use gabarito_core::engine::grade_batch;
use gabarito_core::report::ClassReport;
use gabarito_core::statistics::rank_position;
use gabarito_report::html::write_html_report;

use crate::config::load_config_from;

pub fn execute(
    batch_path: PathBuf,
    output: Option<PathBuf>,
    format: Option<String>,
    standings_limit: Option<usize>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let output = output.unwrap_or(config.output_dir);
    let format = format.unwrap_or(config.default_format);
    let standings_limit = standings_limit.unwrap_or(config.standings_limit);

    let batches: Vec<Batch> = if batch_path.is_dir() {
        batch::load_batch_directory(&batch_path)?
    } else {
        vec![batch::parse_batch(&batch_path)?]
    };

    if batches.is_empty() {
        anyhow::bail!("no batch files found in {}", batch_path.display());
    }

    for batch in &batches {
        let report = grade_batch(batch, standings_limit);

        match format.as_str() {
            "json" => {
                let path = output.join(format!("{}.json", batch.id));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("{}.html", batch.id));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "all" => {
                let json_path = output.join(format!("{}.json", batch.id));
                report.save_json(&json_path)?;
                eprintln!("Report saved to: {}", json_path.display());

                let html_path = output.join(format!("{}.html", batch.id));
                write_html_report(&report, &html_path)?;
                eprintln!("HTML report: {}", html_path.display());
            }
            _ => {
                print_text_report(&report);
            }
        }
    }

    Ok(())
}

fn print_text_report(report: &ClassReport) {
    println!(
        "Turma: {} ({} alunos)",
        report.batch.name, report.batch.student_count
    );
    println!(
        "Atividades: {} questões, {} redações, {} projetos | média matemática: {:.2}",
        report.overview.math_activities,
        report.overview.essay_count,
        report.overview.project_count,
        report.overview.avg_math_score,
    );

    let mut standings = Table::new();
    standings.set_header(vec!["#", "Aluno", "Escola", "Pontos", "Questões"]);
    for (i, entry) in report.standings.iter().enumerate() {
        standings.add_row(vec![
            (i + 1).to_string(),
            entry.name.clone(),
            entry.school.clone(),
            entry.total_points.to_string(),
            entry.questions_answered.to_string(),
        ]);
    }
    println!("\nClassificação:\n{standings}");

    if !report.schools.is_empty() {
        let mut schools = Table::new();
        schools.set_header(vec!["Escola", "Alunos", "Pontos"]);
        for school in &report.schools {
            schools.add_row(vec![
                school.school.clone(),
                school.student_count.to_string(),
                school.total_points.to_string(),
            ]);
        }
        println!("\nDesempenho por escola:\n{schools}");
    }

    let mut totals = Table::new();
    totals.set_header(vec![
        "Aluno",
        "Matemática",
        "Redações",
        "Projetos",
        "Total",
        "Posição",
    ]);
    for summary in &report.summaries {
        let position = rank_position(&report.math_results, &summary.student_id)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        totals.add_row(vec![
            summary.name.clone(),
            summary.points.math.to_string(),
            summary.points.essays.to_string(),
            summary.points.projects.to_string(),
            summary.points.total.to_string(),
            position,
        ]);
    }
    println!("\nPontuação por módulo:\n{totals}");
}
