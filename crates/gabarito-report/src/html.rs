//! HTML class-report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined: the
//! teacher dashboard page for one graded batch.

use anyhow::Result;
use std::path::Path;

use gabarito_core::report::ClassReport;
use gabarito_core::statistics::{top_projects, SchoolPerformance};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a class report.
pub fn generate_html(report: &ClassReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Relatório da turma — {}</title>\n",
        html_escape(&report.batch.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Relatório da turma</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Turma: <strong>{}</strong> | {} alunos | {} questões | {} redações | {} projetos | {}</p>\n",
        html_escape(&report.batch.name),
        report.overview.student_count,
        report.overview.math_activities,
        report.overview.essay_count,
        report.overview.project_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Standings
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Classificação</h2>\n");
    html.push_str("<table class=\"standings\" id=\"standings\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Aluno</th><th onclick=\"sortTable(1)\">Escola</th><th onclick=\"sortTable(2)\">Pontos</th><th onclick=\"sortTable(3)\">Questões</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for entry in &report.standings {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            html_escape(&entry.name),
            html_escape(&entry.school),
            entry.total_points,
            entry.questions_answered,
        ));
    }
    html.push_str("</tbody></table>\n");

    // SVG bar chart of per-school points
    if !report.schools.is_empty() {
        html.push_str("<h2>Desempenho por escola</h2>\n");
        html.push_str(&generate_bar_chart(&report.schools));
    }

    html.push_str("</section>\n");

    // Project gallery
    if !report.projects.is_empty() {
        html.push_str("<section class=\"gallery\">\n");
        html.push_str("<h2>Galeria de projetos</h2>\n");
        html.push_str("<table class=\"gallery-table\">\n");
        html.push_str("<thead><tr><th>Título</th><th>Autor</th><th>Área</th><th>Nível</th><th>Nota</th></tr></thead>\n");
        html.push_str("<tbody>\n");

        let name_of = |student_id: &str| -> String {
            report
                .summaries
                .iter()
                .find(|s| s.student_id == student_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| student_id.to_string())
        };

        for project in top_projects(&report.projects, report.projects.len()) {
            let grade_class = if project.score.score >= 80 {
                "pass"
            } else if project.score.score >= 60 {
                "mid"
            } else {
                "fail"
            };
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
                html_escape(&project.title),
                html_escape(&name_of(&project.student_id)),
                html_escape(&project.area),
                project.tier,
                grade_class,
                project.score.score,
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Dados brutos (JSON)</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &ClassReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(schools: &[SchoolPerformance]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 220;

    let max_points = schools
        .iter()
        .map(|s| s.total_points)
        .max()
        .unwrap_or(0)
        .max(1);

    let total_height = schools.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 80,
        total_height
    );

    for (i, school) in schools.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let fraction = school.total_points as f64 / max_points as f64;
        let width = (fraction * max_width as f64) as usize;

        let color = if fraction >= 0.8 {
            "#22c55e"
        } else if fraction >= 0.5 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&school.school)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{} pts</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            school.total_points
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --mid: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --mid: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.pass { background: var(--pass); }
.mid { background: var(--mid); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('standings');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    const na = parseFloat(va), nb = parseFloat(vb);
    if (!isNaN(na) && !isNaN(nb)) return asc ? na - nb : nb - na;
    return asc ? va.localeCompare(vb) : vb.localeCompare(va);
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
