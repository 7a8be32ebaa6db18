//! Batch grading orchestrator.
//!
//! Turns a parsed [`Batch`] into a [`ClassReport`]: scores every
//! submission, then feeds the records through the statistics layer.

use chrono::Utc;
use uuid::Uuid;

use crate::batch::Batch;
use crate::model::{EssayRecord, MathResult, ProjectRecord, ProjectTier};
use crate::report::{BatchSummary, ClassReport, StudentSummary};
use crate::statistics;
use crate::{essay, project};

/// Grade every submission in a batch and assemble the class report.
///
/// Each drill entry expands into one record per correctly answered
/// question, matching how the platform stores drill results. Standings
/// are truncated to `standings_limit` rows.
pub fn grade_batch(batch: &Batch, standings_limit: usize) -> ClassReport {
    let mut math_results = Vec::new();
    for entry in &batch.math {
        for _ in 0..entry.correct {
            math_results.push(MathResult {
                student_id: entry.student.clone(),
                tier: entry.tier,
                points: entry.tier.points(),
            });
        }
    }

    let essays: Vec<EssayRecord> = batch
        .essays
        .iter()
        .map(|submission| EssayRecord {
            student_id: submission.student.clone(),
            topic: submission.topic.clone(),
            score: essay::evaluate(&submission.text, &submission.topic),
        })
        .collect();

    let projects: Vec<ProjectRecord> = batch
        .projects
        .iter()
        .map(|submission| ProjectRecord {
            student_id: submission.student.clone(),
            title: submission.title.clone(),
            area: submission.area.clone(),
            tier: ProjectTier::from_label(&submission.tier),
            score: project::grade(
                &submission.description,
                &submission.area,
                &submission.tier,
            ),
        })
        .collect();

    let summaries: Vec<StudentSummary> = batch
        .students
        .iter()
        .map(|s| StudentSummary {
            student_id: s.id.clone(),
            name: s.name.clone(),
            school: s.school.clone(),
            points: statistics::module_points(&s.id, &math_results, &essays, &projects),
        })
        .collect();

    let standings =
        statistics::overall_ranking(&batch.students, &math_results, standings_limit);
    let schools = statistics::school_performance(&batch.students, &math_results);
    let overview =
        statistics::overall_stats(&batch.students, &math_results, &essays, &projects);

    ClassReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        batch: BatchSummary {
            id: batch.id.clone(),
            name: batch.name.clone(),
            student_count: batch.students.len(),
        },
        summaries,
        standings,
        schools,
        overview,
        math_results,
        essays,
        projects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::parse_batch_str;
    use crate::model::EssayLevel;
    use std::path::PathBuf;

    const BATCH_TOML: &str = r#"
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
school = "EM Tiradentes"
grade = "7ano"

[[math]]
student = "ana"
tier = "medio"
correct = 3

[[math]]
student = "bia"
tier = "dificil"
correct = 1

[[essays]]
student = "ana"
topic = "tecnologia"
text = "curto"

[[projects]]
student = "bia"
title = "Semáforo inteligente"
area = "Arduino"
tier = "intermediario"
description = "Um semáforo com sensor e código em loop para a escola."
"#;

    fn batch() -> Batch {
        parse_batch_str(BATCH_TOML, &PathBuf::from("test.toml")).unwrap()
    }

    #[test]
    fn drill_entries_expand_per_question() {
        let report = grade_batch(&batch(), 10);
        assert_eq!(report.math_results.len(), 4);
        let ana_points: u32 = report
            .math_results
            .iter()
            .filter(|r| r.student_id == "ana")
            .map(|r| r.points)
            .sum();
        assert_eq!(ana_points, 60);
    }

    #[test]
    fn submissions_are_scored() {
        let report = grade_batch(&batch(), 10);
        assert_eq!(report.essays.len(), 1);
        assert_eq!(report.essays[0].score.level, EssayLevel::Beginner);

        assert_eq!(report.projects.len(), 1);
        // 50 base + 8 originality (11 distinct words) + 15 tier + 9 technical
        let project = &report.projects[0].score;
        assert_eq!(project.originality_bonus, 8);
        assert_eq!(project.tier_bonus, 15);
        assert_eq!(project.technical_bonus, 9);
        assert_eq!(project.score, 82);
    }

    #[test]
    fn summaries_cover_every_student() {
        let report = grade_batch(&batch(), 10);
        assert_eq!(report.summaries.len(), 2);
        let ana = report
            .summaries
            .iter()
            .find(|s| s.student_id == "ana")
            .unwrap();
        assert_eq!(ana.points.math, 60);
        assert_eq!(ana.points.essays, 25);
        assert_eq!(ana.points.total, 85);
    }

    #[test]
    fn standings_and_schools_are_populated() {
        let report = grade_batch(&batch(), 10);
        assert_eq!(report.standings.len(), 2);
        assert_eq!(report.standings[0].student_id, "ana");
        assert_eq!(report.schools.len(), 2);
        assert_eq!(report.overview.student_count, 2);
        assert_eq!(report.overview.math_activities, 4);
    }

    #[test]
    fn standings_limit_is_honored() {
        let report = grade_batch(&batch(), 1);
        assert_eq!(report.standings.len(), 1);
    }

    #[test]
    fn batch_summary_carries_header() {
        let report = grade_batch(&batch(), 10);
        assert_eq!(report.batch.id, "turma-7a");
        assert_eq!(report.batch.name, "Turma 7A");
        assert_eq!(report.batch.student_count, 2);
    }
}
