//! End-to-end pipeline test: init -> validate -> grade -> compare.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gabarito() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("gabarito").unwrap()
}

#[test]
fn full_pipeline() {
    let dir = TempDir::new().unwrap();

    // 1. Scaffold a project
    gabarito()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // 2. The example batch validates cleanly
    gabarito()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--batch")
        .arg("turmas/exemplo.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All batch files valid"));

    // 3. Grade it into JSON and HTML reports
    gabarito()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--batch")
        .arg("turmas/exemplo.toml")
        .arg("--output")
        .arg("reports")
        .arg("--format")
        .arg("all")
        .assert()
        .success();

    let json_path = dir.path().join("reports/turma-exemplo.json");
    let html_path = dir.path().join("reports/turma-exemplo.html");
    assert!(json_path.exists());
    assert!(html_path.exists());

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Turma Exemplo"));
    assert!(html.contains("Semáforo inteligente"));

    // 4. A report compared against itself shows no movement
    gabarito()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg("reports/turma-exemplo.json")
        .arg("--current")
        .arg("reports/turma-exemplo.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 advances"))
        .stdout(predicate::str::contains("0 setbacks"));
}

#[test]
fn grade_directory_of_batches() {
    let dir = TempDir::new().unwrap();

    gabarito()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gabarito()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--batch")
        .arg("turmas")
        .arg("--output")
        .arg("reports")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    assert!(dir.path().join("reports/turma-exemplo.json").exists());
}

#[test]
fn compare_detects_progress_between_batches() {
    let dir = TempDir::new().unwrap();

    let baseline_batch = r#"
[batch]
id = "turma"
name = "Turma"

[[students]]
id = "ana"
name = "Ana"
school = "EM Central"
grade = "7ano"

[[math]]
student = "ana"
tier = "facil"
correct = 1
"#;
    let current_batch = r#"
[batch]
id = "turma"
name = "Turma"

[[students]]
id = "ana"
name = "Ana"
school = "EM Central"
grade = "7ano"

[[math]]
student = "ana"
tier = "dificil"
correct = 5
"#;
    std::fs::write(dir.path().join("baseline.toml"), baseline_batch).unwrap();
    std::fs::write(dir.path().join("current.toml"), current_batch).unwrap();

    for (file, output) in [("baseline.toml", "base"), ("current.toml", "cur")] {
        gabarito()
            .current_dir(dir.path())
            .arg("grade")
            .arg("--batch")
            .arg(file)
            .arg("--output")
            .arg(output)
            .arg("--format")
            .arg("json")
            .assert()
            .success();
    }

    // 10 points -> 150 points
    gabarito()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg("base/turma.json")
        .arg("--current")
        .arg("cur/turma.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 advances"))
        .stdout(predicate::str::contains("Ana 10 -> 150"));
}
