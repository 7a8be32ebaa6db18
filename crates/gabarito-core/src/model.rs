//! Core data model types for gabarito.
//!
//! These are the value records the scoring functions consume and produce.
//! Nothing here persists itself; records are handed to the caller, which
//! stores or displays them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLabelError;

/// Arithmetic drill difficulty tier.
///
/// Controls the operand range, the allowed operators, and the point value
/// of each generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "facil")]
    Easy,
    #[serde(rename = "medio")]
    Medium,
    #[serde(rename = "dificil")]
    Hard,
}

impl Tier {
    /// Largest operand drawn for addition and subtraction at this tier.
    pub fn max_operand(&self) -> i64 {
        match self {
            Tier::Easy => 10,
            Tier::Medium => 50,
            Tier::Hard => 100,
        }
    }

    /// Operators a question at this tier may use.
    pub fn operators(&self) -> &'static [Operator] {
        match self {
            Tier::Easy => &[Operator::Add, Operator::Sub],
            Tier::Medium => &[Operator::Add, Operator::Sub, Operator::Mul],
            Tier::Hard => &[
                Operator::Add,
                Operator::Sub,
                Operator::Mul,
                Operator::Div,
            ],
        }
    }

    /// Points awarded for a correct answer at this tier.
    pub fn points(&self) -> u32 {
        match self {
            Tier::Easy => 10,
            Tier::Medium => 20,
            Tier::Hard => 30,
        }
    }

    /// Lenient label parse: pt-BR labels and English aliases, anything
    /// else falls back to `Easy`.
    pub fn from_label(s: &str) -> Tier {
        s.parse().unwrap_or(Tier::Easy)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Easy => write!(f, "facil"),
            Tier::Medium => write!(f, "medio"),
            Tier::Hard => write!(f, "dificil"),
        }
    }
}

impl FromStr for Tier {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facil" | "fácil" | "easy" => Ok(Tier::Easy),
            "medio" | "médio" | "medium" => Ok(Tier::Medium),
            "dificil" | "difícil" | "hard" => Ok(Tier::Hard),
            other => Err(ParseLabelError::UnknownTier(other.to_string())),
        }
    }
}

/// Declared difficulty of a robotics project.
///
/// Parallel to [`Tier`] but with its own labels and bonus weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectTier {
    #[serde(rename = "iniciante")]
    Beginner,
    #[serde(rename = "intermediario")]
    Intermediate,
    #[serde(rename = "avancado")]
    Advanced,
}

impl ProjectTier {
    /// Bonus points this tier adds to a project's grade.
    pub fn bonus(&self) -> u32 {
        match self {
            ProjectTier::Beginner => 5,
            ProjectTier::Intermediate => 15,
            ProjectTier::Advanced => 25,
        }
    }

    /// Lenient label parse: unknown labels take the beginner bonus.
    pub fn from_label(s: &str) -> ProjectTier {
        s.parse().unwrap_or(ProjectTier::Beginner)
    }
}

impl fmt::Display for ProjectTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectTier::Beginner => write!(f, "iniciante"),
            ProjectTier::Intermediate => write!(f, "intermediario"),
            ProjectTier::Advanced => write!(f, "avancado"),
        }
    }
}

impl FromStr for ProjectTier {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iniciante" | "beginner" => Ok(ProjectTier::Beginner),
            "intermediario" | "intermediário" | "intermediate" => {
                Ok(ProjectTier::Intermediate)
            }
            "avancado" | "avançado" | "advanced" => Ok(ProjectTier::Advanced),
            other => Err(ParseLabelError::UnknownProjectTier(other.to_string())),
        }
    }
}

/// Classification produced by the essay evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EssayLevel {
    #[serde(rename = "Iniciante")]
    Beginner,
    #[serde(rename = "Intermediário")]
    Intermediate,
    #[serde(rename = "Proficiente")]
    Proficient,
    #[serde(rename = "Avançado")]
    Advanced,
}

impl EssayLevel {
    /// Classify a 0–100 criterion sum.
    pub fn from_score(score: u32) -> EssayLevel {
        match score {
            80.. => EssayLevel::Advanced,
            60..=79 => EssayLevel::Proficient,
            40..=59 => EssayLevel::Intermediate,
            _ => EssayLevel::Beginner,
        }
    }

    /// Module points the platform awards for an essay at this level.
    pub fn points(&self) -> u32 {
        match self {
            EssayLevel::Beginner => 25,
            EssayLevel::Intermediate => 50,
            EssayLevel::Proficient => 75,
            EssayLevel::Advanced => 100,
        }
    }
}

impl fmt::Display for EssayLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EssayLevel::Beginner => write!(f, "Iniciante"),
            EssayLevel::Intermediate => write!(f, "Intermediário"),
            EssayLevel::Proficient => write!(f, "Proficiente"),
            EssayLevel::Advanced => write!(f, "Avançado"),
        }
    }
}

/// Arithmetic operator in a drill question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Sub => write!(f, "-"),
            Operator::Mul => write!(f, "×"),
            Operator::Div => write!(f, "÷"),
        }
    }
}

/// A generated drill question with its expected answer.
///
/// Invariants: subtraction has `operand_a >= operand_b`; division has
/// `operand_a == operand_b * expected_answer` with divisor and quotient
/// both in `[2, 10]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub operator: Operator,
    pub operand_a: i64,
    pub operand_b: i64,
    pub expected_answer: i64,
    /// Points awarded for a correct answer.
    pub point_value: u32,
    /// Tier the question was generated for.
    pub tier: Tier,
}

/// Outcome of checking a learner's reply against a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points_earned: u32,
    /// Learner-facing feedback message.
    pub message: String,
}

/// Result of evaluating an essay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayScore {
    pub level: EssayLevel,
    /// Criterion sum, 0–100.
    pub score: u32,
    /// Summary message for the level.
    pub message: String,
    /// One feedback line per criterion: length, vocabulary, structure.
    pub details: Vec<String>,
    pub word_count: usize,
    /// Floored at 1, so averages never divide by zero.
    pub sentence_count: usize,
    pub technical_term_count: usize,
}

/// Result of grading a project description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectScore {
    /// Final grade, 0–100.
    pub score: u32,
    pub originality_bonus: u32,
    pub tier_bonus: u32,
    pub technical_bonus: u32,
}

/// Platform role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "aluno")]
    Student,
    #[serde(rename = "professor")]
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "aluno"),
            Role::Teacher => write!(f, "professor"),
        }
    }
}

/// A registered user, as fed in by the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub school: String,
    pub grade: String,
    pub role: Role,
}

/// One answered drill question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathResult {
    pub student_id: String,
    pub tier: Tier,
    pub points: u32,
}

/// One evaluated essay submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssayRecord {
    pub student_id: String,
    pub topic: String,
    pub score: EssayScore,
}

/// One graded project submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub student_id: String,
    pub title: String,
    pub area: String,
    pub tier: ProjectTier,
    pub score: ProjectScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_display_and_parse() {
        assert_eq!(Tier::Easy.to_string(), "facil");
        assert_eq!(Tier::Hard.to_string(), "dificil");
        assert_eq!("medio".parse::<Tier>().unwrap(), Tier::Medium);
        assert_eq!("Médio".parse::<Tier>().unwrap(), Tier::Medium);
        assert_eq!("hard".parse::<Tier>().unwrap(), Tier::Hard);
        assert!("impossivel".parse::<Tier>().is_err());
    }

    #[test]
    fn tier_lenient_parse_defaults_to_easy() {
        assert_eq!(Tier::from_label("dificil"), Tier::Hard);
        assert_eq!(Tier::from_label("impossivel"), Tier::Easy);
        assert_eq!(Tier::from_label(""), Tier::Easy);
    }

    #[test]
    fn tier_table() {
        assert_eq!(Tier::Easy.max_operand(), 10);
        assert_eq!(Tier::Medium.max_operand(), 50);
        assert_eq!(Tier::Hard.max_operand(), 100);
        assert_eq!(Tier::Easy.points(), 10);
        assert_eq!(Tier::Medium.points(), 20);
        assert_eq!(Tier::Hard.points(), 30);
        assert_eq!(Tier::Easy.operators().len(), 2);
        assert_eq!(Tier::Medium.operators().len(), 3);
        assert_eq!(Tier::Hard.operators().len(), 4);
    }

    #[test]
    fn project_tier_bonus_and_parse() {
        assert_eq!(ProjectTier::from_label("avancado").bonus(), 25);
        assert_eq!(ProjectTier::from_label("avançado").bonus(), 25);
        assert_eq!(ProjectTier::from_label("intermediário").bonus(), 15);
        // Misspelled labels take the beginner bonus.
        assert_eq!(ProjectTier::from_label("advancado").bonus(), 5);
        assert!("advancado".parse::<ProjectTier>().is_err());
    }

    #[test]
    fn essay_level_brackets() {
        assert_eq!(EssayLevel::from_score(100), EssayLevel::Advanced);
        assert_eq!(EssayLevel::from_score(80), EssayLevel::Advanced);
        assert_eq!(EssayLevel::from_score(79), EssayLevel::Proficient);
        assert_eq!(EssayLevel::from_score(60), EssayLevel::Proficient);
        assert_eq!(EssayLevel::from_score(59), EssayLevel::Intermediate);
        assert_eq!(EssayLevel::from_score(40), EssayLevel::Intermediate);
        assert_eq!(EssayLevel::from_score(39), EssayLevel::Beginner);
        assert_eq!(EssayLevel::from_score(0), EssayLevel::Beginner);
    }

    #[test]
    fn essay_level_points() {
        assert_eq!(EssayLevel::Beginner.points(), 25);
        assert_eq!(EssayLevel::Intermediate.points(), 50);
        assert_eq!(EssayLevel::Proficient.points(), 75);
        assert_eq!(EssayLevel::Advanced.points(), 100);
    }

    #[test]
    fn tier_serde_uses_pt_br_labels() {
        let json = serde_json::to_string(&Tier::Hard).unwrap();
        assert_eq!(json, "\"dificil\"");
        let level: EssayLevel = serde_json::from_str("\"Avançado\"").unwrap();
        assert_eq!(level, EssayLevel::Advanced);
    }

    #[test]
    fn math_result_serde_roundtrip() {
        let result = MathResult {
            student_id: "ana".into(),
            tier: Tier::Medium,
            points: 20,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: MathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.student_id, "ana");
        assert_eq!(back.tier, Tier::Medium);
    }
}
