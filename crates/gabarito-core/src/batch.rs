//! TOML batch file parser.
//!
//! Loads class batches (students plus their submissions) from TOML files
//! and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Role, StudentProfile, Tier};

/// Area labels the platform recognizes for robotics projects.
pub const KNOWN_AREAS: &[&str] = &["Arduino", "Scratch", "IA", "Maker"];

/// A class batch: the students and everything they submitted.
#[derive(Debug, Clone)]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub students: Vec<StudentProfile>,
    pub math: Vec<MathDrillEntry>,
    pub essays: Vec<EssaySubmission>,
    pub projects: Vec<ProjectSubmission>,
}

/// Drill results for one student at one tier.
#[derive(Debug, Clone)]
pub struct MathDrillEntry {
    pub student: String,
    pub tier: Tier,
    /// Number of questions the student answered correctly.
    pub correct: u32,
}

/// An essay waiting to be evaluated.
#[derive(Debug, Clone)]
pub struct EssaySubmission {
    pub student: String,
    pub topic: String,
    pub text: String,
}

/// A project waiting to be graded.
#[derive(Debug, Clone)]
pub struct ProjectSubmission {
    pub student: String,
    pub title: String,
    pub area: String,
    /// Raw tier label; graded leniently, so typos are not rejected here.
    pub tier: String,
    pub description: String,
}

/// Intermediate TOML structure for parsing batch files.
#[derive(Debug, Deserialize)]
struct TomlBatchFile {
    batch: TomlBatchHeader,
    #[serde(default)]
    students: Vec<TomlStudent>,
    #[serde(default)]
    math: Vec<TomlMathEntry>,
    #[serde(default)]
    essays: Vec<TomlEssay>,
    #[serde(default)]
    projects: Vec<TomlProject>,
}

#[derive(Debug, Deserialize)]
struct TomlBatchHeader {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    id: String,
    name: String,
    school: String,
    #[serde(default)]
    grade: String,
    #[serde(default = "default_role")]
    role: String,
}

fn default_role() -> String {
    "aluno".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlMathEntry {
    student: String,
    #[serde(default = "default_tier")]
    tier: String,
    correct: u32,
}

fn default_tier() -> String {
    "facil".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlEssay {
    student: String,
    #[serde(default)]
    topic: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct TomlProject {
    student: String,
    title: String,
    #[serde(default)]
    area: String,
    #[serde(default)]
    tier: String,
    description: String,
}

/// Parse a single TOML file into a [`Batch`].
pub fn parse_batch(path: &Path) -> Result<Batch> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file: {}", path.display()))?;

    parse_batch_str(&content, path)
}

/// Parse a TOML string into a [`Batch`] (useful for testing).
pub fn parse_batch_str(content: &str, source_path: &Path) -> Result<Batch> {
    let parsed: TomlBatchFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| StudentProfile {
            id: s.id,
            name: s.name,
            school: s.school,
            grade: s.grade,
            role: if s.role == "professor" {
                Role::Teacher
            } else {
                Role::Student
            },
        })
        .collect();

    let math = parsed
        .math
        .into_iter()
        .map(|m| MathDrillEntry {
            student: m.student,
            tier: Tier::from_label(&m.tier),
            correct: m.correct,
        })
        .collect();

    let essays = parsed
        .essays
        .into_iter()
        .map(|e| EssaySubmission {
            student: e.student,
            topic: e.topic,
            text: e.text,
        })
        .collect();

    let projects = parsed
        .projects
        .into_iter()
        .map(|p| ProjectSubmission {
            student: p.student,
            title: p.title,
            area: p.area,
            tier: p.tier,
            description: p.description,
        })
        .collect();

    Ok(Batch {
        id: parsed.batch.id,
        name: parsed.batch.name,
        students,
        math,
        essays,
        projects,
    })
}

/// Recursively load all `.toml` batch files from a directory.
pub fn load_batch_directory(dir: &Path) -> Result<Vec<Batch>> {
    let mut batches = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            batches.extend(load_batch_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_batch(&path) {
                Ok(batch) => batches.push(batch),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(batches)
}

/// A warning from batch validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student ID the warning refers to (if applicable).
    pub student_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a batch for common issues.
pub fn validate_batch(batch: &Batch) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate student IDs
    let mut seen_ids = std::collections::HashSet::new();
    for student in &batch.students {
        if !seen_ids.insert(&student.id) {
            warnings.push(ValidationWarning {
                student_id: Some(student.id.clone()),
                message: format!("duplicate student ID: {}", student.id),
            });
        }
    }

    // Check that submissions reference registered students
    let known: std::collections::HashSet<&str> =
        batch.students.iter().map(|s| s.id.as_str()).collect();
    let referenced = batch
        .math
        .iter()
        .map(|m| &m.student)
        .chain(batch.essays.iter().map(|e| &e.student))
        .chain(batch.projects.iter().map(|p| &p.student));
    let mut reported = std::collections::HashSet::new();
    for student in referenced {
        if !known.contains(student.as_str()) && reported.insert(student.clone()) {
            warnings.push(ValidationWarning {
                student_id: Some(student.clone()),
                message: format!("submission references unknown student: {student}"),
            });
        }
    }

    // Check for empty submission text
    for essay in &batch.essays {
        if essay.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                student_id: Some(essay.student.clone()),
                message: "essay text is empty".into(),
            });
        }
    }
    for project in &batch.projects {
        if project.description.trim().is_empty() {
            warnings.push(ValidationWarning {
                student_id: Some(project.student.clone()),
                message: format!("project \"{}\" has an empty description", project.title),
            });
        }
    }

    // Warn about area labels the platform does not recognize
    for project in &batch.projects {
        if !project.area.is_empty() && !KNOWN_AREAS.contains(&project.area.as_str()) {
            warnings.push(ValidationWarning {
                student_id: Some(project.student.clone()),
                message: format!("unknown project area: {}", project.area),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[batch]
id = "turma-7a"
name = "Turma 7A"

[[students]]
id = "ana"
name = "Ana Souza"
school = "EM Dom Pedro II"
grade = "7ano"

[[students]]
id = "bia"
name = "Bia Lima"
school = "EM Dom Pedro II"
grade = "7ano"

[[math]]
student = "ana"
tier = "medio"
correct = 4

[[essays]]
student = "ana"
topic = "tecnologia"
text = "O computador executa o algoritmo sobre os dados."

[[projects]]
student = "bia"
title = "Semáforo inteligente"
area = "Arduino"
tier = "intermediario"
description = "Um semáforo com sensor e código em loop."
"#;

    #[test]
    fn parse_valid_toml() {
        let batch = parse_batch_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(batch.id, "turma-7a");
        assert_eq!(batch.name, "Turma 7A");
        assert_eq!(batch.students.len(), 2);
        assert_eq!(batch.math.len(), 1);
        assert_eq!(batch.math[0].tier, Tier::Medium);
        assert_eq!(batch.math[0].correct, 4);
        assert_eq!(batch.essays.len(), 1);
        assert_eq!(batch.projects.len(), 1);
        assert_eq!(batch.projects[0].area, "Arduino");
    }

    #[test]
    fn parse_defaults() {
        let toml = r#"
[batch]
id = "minimal"
name = "Minimal"

[[students]]
id = "ana"
name = "Ana"
school = "EM Central"

[[math]]
student = "ana"
correct = 2
"#;
        let batch = parse_batch_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(batch.students[0].role, Role::Student);
        assert_eq!(batch.students[0].grade, "");
        assert_eq!(batch.math[0].tier, Tier::Easy);
    }

    #[test]
    fn parse_teacher_role() {
        let toml = r#"
[batch]
id = "t"
name = "T"

[[students]]
id = "silva"
name = "Prof. Silva"
school = "EM Central"
role = "professor"
"#;
        let batch = parse_batch_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(batch.students[0].role, Role::Teacher);
    }

    #[test]
    fn misspelled_tier_is_kept_lenient() {
        let toml = r#"
[batch]
id = "t"
name = "T"

[[math]]
student = "ana"
tier = "impossivel"
correct = 1
"#;
        let batch = parse_batch_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(batch.math[0].tier, Tier::Easy);
    }

    #[test]
    fn validate_clean_batch() {
        let batch = parse_batch_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert!(validate_batch(&batch).is_empty());
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[batch]
id = "dupes"
name = "Dupes"

[[students]]
id = "same"
name = "First"
school = "A"

[[students]]
id = "same"
name = "Second"
school = "A"
"#;
        let batch = parse_batch_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_batch(&batch);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_unknown_student_reference() {
        let toml = r#"
[batch]
id = "t"
name = "T"

[[essays]]
student = "fantasma"
text = "algo"
"#;
        let batch = parse_batch_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_batch(&batch);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("unknown student")));
    }

    #[test]
    fn validate_empty_text_and_unknown_area() {
        let toml = r#"
[batch]
id = "t"
name = "T"

[[students]]
id = "ana"
name = "Ana"
school = "A"

[[essays]]
student = "ana"
text = "   "

[[projects]]
student = "ana"
title = "P"
area = "Lego"
tier = "iniciante"
description = "Um projeto com motor."
"#;
        let batch = parse_batch_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_batch(&batch);
        assert!(warnings.iter().any(|w| w.message.contains("essay text")));
        assert!(warnings.iter().any(|w| w.message.contains("unknown project area")));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_batch_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("turma.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();
        // An unparseable file is skipped, not fatal.
        std::fs::write(dir.path().join("broken.toml"), "not toml [").unwrap();

        let batches = load_batch_directory(dir.path()).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].id, "turma-7a");
    }
}
