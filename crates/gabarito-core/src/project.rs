//! Robotics project grader.
//!
//! Grades a project description from a base of 50 points plus three
//! independently-capped bonuses: originality, declared difficulty, and
//! technical depth.

use std::collections::HashSet;

use crate::model::{ProjectScore, ProjectTier};

/// Programming vocabulary used for the technical-depth bonus.
pub const PROGRAMMING_TERMS: &[&str] = &[
    "código",
    "programa",
    "sensor",
    "algoritmo",
    "loop",
    "condição",
    "variável",
    "função",
    "biblioteca",
];

/// Grade a project description.
///
/// `area` is recorded with the submission but does not affect the grade.
/// Unknown tier labels take the beginner bonus; the grand total is capped
/// at 100.
pub fn grade(description: &str, _area: &str, tier_label: &str) -> ProjectScore {
    let description_lower = description.to_lowercase();

    let distinct_words: HashSet<&str> = description_lower.split_whitespace().collect();
    let originality_bonus = if distinct_words.len() > 20 {
        15
    } else if distinct_words.len() > 10 {
        8
    } else {
        0
    };

    let tier_bonus = ProjectTier::from_label(tier_label).bonus();

    let term_count = PROGRAMMING_TERMS
        .iter()
        .filter(|term| description_lower.contains(**term))
        .count() as u32;
    let technical_bonus = (term_count * 3).min(15);

    let score = (50 + originality_bonus + tier_bonus + technical_bonus).min(100);

    ProjectScore {
        score,
        originality_bonus,
        tier_bonus,
        technical_bonus,
    }
}
