//! Class report types with JSON persistence and progress comparison.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{EssayRecord, MathResult, ProjectRecord};
use crate::statistics::{
    ModulePoints, OverviewStats, RankingEntry, SchoolPerformance,
};

/// A complete class report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the graded batch.
    pub batch: BatchSummary,
    /// Per-student module points.
    pub summaries: Vec<StudentSummary>,
    /// Drill standings, best first.
    pub standings: Vec<RankingEntry>,
    /// Per-school drill performance.
    pub schools: Vec<SchoolPerformance>,
    /// Activity overview.
    pub overview: OverviewStats,
    /// Individual drill results.
    pub math_results: Vec<MathResult>,
    /// Evaluated essays.
    pub essays: Vec<EssayRecord>,
    /// Graded projects.
    pub projects: Vec<ProjectRecord>,
}

/// Summary of a batch (without the full submission texts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub id: String,
    pub name: String,
    pub student_count: usize,
}

/// One student's totals inside a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub name: String,
    pub school: String,
    pub points: ModulePoints,
}

impl ClassReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ClassReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report against a baseline to track student progress.
    ///
    /// Total-point deltas within `min_delta` of zero count as unchanged.
    pub fn compare(&self, baseline: &ClassReport, min_delta: u32) -> ProgressReport {
        let totals = |report: &ClassReport| -> HashMap<String, (String, u32)> {
            report
                .summaries
                .iter()
                .map(|s| (s.student_id.clone(), (s.name.clone(), s.points.total)))
                .collect()
        };

        let baseline_totals = totals(baseline);
        let current_totals = totals(self);

        let mut advances = Vec::new();
        let mut setbacks = Vec::new();
        let mut unchanged = 0usize;
        let mut new_students = Vec::new();

        for (student_id, (name, current)) in &current_totals {
            if let Some((_, baseline_points)) = baseline_totals.get(student_id) {
                let delta = *current as i64 - *baseline_points as i64;
                if delta > min_delta as i64 {
                    advances.push(StudentProgress {
                        student_id: student_id.clone(),
                        name: name.clone(),
                        baseline_points: *baseline_points,
                        current_points: *current,
                        delta,
                    });
                } else if delta < -(min_delta as i64) {
                    setbacks.push(StudentProgress {
                        student_id: student_id.clone(),
                        name: name.clone(),
                        baseline_points: *baseline_points,
                        current_points: *current,
                        delta,
                    });
                } else {
                    unchanged += 1;
                }
            } else {
                new_students.push(student_id.clone());
            }
        }

        let mut departed_students: Vec<String> = baseline_totals
            .keys()
            .filter(|id| !current_totals.contains_key(*id))
            .cloned()
            .collect();

        advances.sort_by(|a, b| b.delta.cmp(&a.delta));
        setbacks.sort_by(|a, b| a.delta.cmp(&b.delta));
        new_students.sort();
        departed_students.sort();

        ProgressReport {
            advances,
            setbacks,
            unchanged,
            new_students,
            departed_students,
        }
    }
}

/// Result of comparing two class reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Students whose totals went up, largest gain first.
    pub advances: Vec<StudentProgress>,
    /// Students whose totals went down, largest loss first.
    pub setbacks: Vec<StudentProgress>,
    /// Students with no significant change.
    pub unchanged: usize,
    /// Students in the current report but not the baseline.
    pub new_students: Vec<String>,
    /// Students in the baseline but not the current report.
    pub departed_students: Vec<String>,
}

/// One student's total-point movement between two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProgress {
    pub student_id: String,
    pub name: String,
    pub baseline_points: u32,
    pub current_points: u32,
    pub delta: i64,
}

impl ProgressReport {
    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} advances, {} setbacks, {} unchanged\n\n",
            self.advances.len(),
            self.setbacks.len(),
            self.unchanged
        ));

        if !self.advances.is_empty() {
            md.push_str("### Advances\n\n");
            md.push_str("| Student | Baseline | Current | Delta |\n");
            md.push_str("|---------|----------|---------|-------|\n");
            for p in &self.advances {
                md.push_str(&format!(
                    "| {} | {} | {} | +{} |\n",
                    p.name, p.baseline_points, p.current_points, p.delta
                ));
            }
            md.push('\n');
        }

        if !self.setbacks.is_empty() {
            md.push_str("### Setbacks\n\n");
            md.push_str("| Student | Baseline | Current | Delta |\n");
            md.push_str("|---------|----------|---------|-------|\n");
            for p in &self.setbacks {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    p.name, p.baseline_points, p.current_points, p.delta
                ));
            }
            md.push('\n');
        }

        if !self.new_students.is_empty() {
            md.push_str(&format!("New students: {}\n", self.new_students.join(", ")));
        }
        if !self.departed_students.is_empty() {
            md.push_str(&format!(
                "Departed students: {}\n",
                self.departed_students.join(", ")
            ));
        }

        md
    }

    /// Returns true if any student's total went down.
    pub fn has_setbacks(&self) -> bool {
        !self.setbacks.is_empty()
    }
}
