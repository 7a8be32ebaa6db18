//! Rankings and aggregate statistics over scored records.
//!
//! Pure functions over record slices; the persistence collaborator feeds
//! them in. These mirror the dashboard, ranking, and teacher-report
//! queries of the platform.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{EssayRecord, MathResult, ProjectRecord, Role, StudentProfile};

/// Per-module point totals for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePoints {
    pub math: u32,
    pub essays: u32,
    pub projects: u32,
    pub total: u32,
}

/// Sum one student's points across all three modules.
///
/// Essay points come from the classification level, project points from
/// the grade.
pub fn module_points(
    student_id: &str,
    math: &[MathResult],
    essays: &[EssayRecord],
    projects: &[ProjectRecord],
) -> ModulePoints {
    let math_points: u32 = math
        .iter()
        .filter(|r| r.student_id == student_id)
        .map(|r| r.points)
        .sum();
    let essay_points: u32 = essays
        .iter()
        .filter(|r| r.student_id == student_id)
        .map(|r| r.score.level.points())
        .sum();
    let project_points: u32 = projects
        .iter()
        .filter(|r| r.student_id == student_id)
        .map(|r| r.score.score)
        .sum();

    ModulePoints {
        math: math_points,
        essays: essay_points,
        projects: project_points,
        total: math_points + essay_points + project_points,
    }
}

/// Grand total across all modules for one student.
pub fn total_points(
    student_id: &str,
    math: &[MathResult],
    essays: &[EssayRecord],
    projects: &[ProjectRecord],
) -> u32 {
    module_points(student_id, math, essays, projects).total
}

/// One row of the overall drill ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub student_id: String,
    pub name: String,
    pub school: String,
    pub total_points: u32,
    pub questions_answered: usize,
}

/// Overall drill ranking: students only, total points descending.
///
/// Students with no results rank with zero points. Ties break by name so
/// the ordering is stable across runs.
pub fn overall_ranking(
    students: &[StudentProfile],
    math: &[MathResult],
    limit: usize,
) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = students
        .iter()
        .filter(|s| s.role == Role::Student)
        .map(|s| {
            let results: Vec<&MathResult> =
                math.iter().filter(|r| r.student_id == s.id).collect();
            RankingEntry {
                student_id: s.id.clone(),
                name: s.name.clone(),
                school: s.school.clone(),
                total_points: results.iter().map(|r| r.points).sum(),
                questions_answered: results.len(),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.name.cmp(&b.name))
    });
    entries.truncate(limit);
    entries
}

/// One row of a per-school ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolRankingEntry {
    pub student_id: String,
    pub name: String,
    pub grade: String,
    pub total_points: u32,
}

/// Drill ranking restricted to one school.
pub fn school_ranking(
    students: &[StudentProfile],
    math: &[MathResult],
    school: &str,
    limit: usize,
) -> Vec<SchoolRankingEntry> {
    let mut entries: Vec<SchoolRankingEntry> = students
        .iter()
        .filter(|s| s.role == Role::Student && s.school == school)
        .map(|s| SchoolRankingEntry {
            student_id: s.id.clone(),
            name: s.name.clone(),
            grade: s.grade.clone(),
            total_points: math
                .iter()
                .filter(|r| r.student_id == s.id)
                .map(|r| r.points)
                .sum(),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.name.cmp(&b.name))
    });
    entries.truncate(limit);
    entries
}

/// Competition-ranking position of a student among those with at least
/// one drill result. Ties share a position; `None` for students with no
/// results.
pub fn rank_position(math: &[MathResult], student_id: &str) -> Option<usize> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for r in math {
        *totals.entry(r.student_id.as_str()).or_default() += r.points;
    }

    let own = *totals.get(student_id)?;
    let ahead = totals.values().filter(|&&t| t > own).count();
    Some(ahead + 1)
}

/// Aggregate drill performance of one school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolPerformance {
    pub school: String,
    pub student_count: usize,
    pub total_points: u32,
}

/// Per-school student counts and drill points, descending by points.
pub fn school_performance(
    students: &[StudentProfile],
    math: &[MathResult],
) -> Vec<SchoolPerformance> {
    let mut by_school: HashMap<&str, (usize, u32)> = HashMap::new();
    for s in students.iter().filter(|s| s.role == Role::Student) {
        let entry = by_school.entry(s.school.as_str()).or_default();
        entry.0 += 1;
        entry.1 += math
            .iter()
            .filter(|r| r.student_id == s.id)
            .map(|r| r.points)
            .sum::<u32>();
    }

    let mut performance: Vec<SchoolPerformance> = by_school
        .into_iter()
        .map(|(school, (student_count, total_points))| SchoolPerformance {
            school: school.to_string(),
            student_count,
            total_points,
        })
        .collect();
    performance.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.school.cmp(&b.school))
    });
    performance
}

/// Activity overview for the teacher dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    pub student_count: usize,
    pub teacher_count: usize,
    pub math_activities: usize,
    pub essay_count: usize,
    pub project_count: usize,
    /// Mean points per answered drill question, rounded to 2 decimals.
    pub avg_math_score: f64,
}

/// Compute the dashboard overview.
pub fn overall_stats(
    students: &[StudentProfile],
    math: &[MathResult],
    essays: &[EssayRecord],
    projects: &[ProjectRecord],
) -> OverviewStats {
    let avg_math_score = if math.is_empty() {
        0.0
    } else {
        let mean = math.iter().map(|r| r.points as f64).sum::<f64>() / math.len() as f64;
        (mean * 100.0).round() / 100.0
    };

    OverviewStats {
        student_count: students.iter().filter(|s| s.role == Role::Student).count(),
        teacher_count: students.iter().filter(|s| s.role == Role::Teacher).count(),
        math_activities: math.len(),
        essay_count: essays.len(),
        project_count: projects.len(),
        avg_math_score,
    }
}

/// Gallery ordering: projects by grade, descending.
pub fn top_projects(projects: &[ProjectRecord], limit: usize) -> Vec<&ProjectRecord> {
    let mut ordered: Vec<&ProjectRecord> = projects.iter().collect();
    ordered.sort_by(|a, b| {
        b.score
            .score
            .cmp(&a.score.score)
            .then_with(|| a.title.cmp(&b.title))
    });
    ordered.truncate(limit);
    ordered
}
