//! Arithmetic drill question generator.
//!
//! Questions are generated from a caller-supplied [`Rng`] so callers and
//! tests can seed the sequence and reproduce a drill exactly.

use rand::Rng;

use crate::model::{AnswerOutcome, Operator, Question, Tier};

/// Generate one question for the given tier.
///
/// Addition and subtraction draw operands from `[1, max_operand]`;
/// subtraction orders them so the result is never negative.
/// Multiplication draws from `[2, 12]` regardless of tier. Division draws
/// divisor and quotient from `[2, 10]` and derives the dividend, so the
/// learner never sees a remainder.
pub fn generate(tier: Tier, rng: &mut impl Rng) -> Question {
    let operators = tier.operators();
    let operator = operators[rng.gen_range(0..operators.len())];
    let max = tier.max_operand();

    let (operand_a, operand_b, expected_answer) = match operator {
        Operator::Add => {
            let a = rng.gen_range(1..=max);
            let b = rng.gen_range(1..=max);
            (a, b, a + b)
        }
        Operator::Sub => {
            let a = rng.gen_range(1..=max);
            let b = rng.gen_range(1..=max);
            let (a, b) = (a.max(b), a.min(b));
            (a, b, a - b)
        }
        Operator::Mul => {
            let a = rng.gen_range(2..=12);
            let b = rng.gen_range(2..=12);
            (a, b, a * b)
        }
        Operator::Div => {
            let divisor = rng.gen_range(2..=10);
            let quotient = rng.gen_range(2..=10);
            (divisor * quotient, divisor, quotient)
        }
    };

    Question {
        operator,
        operand_a,
        operand_b,
        expected_answer,
        point_value: tier.points(),
        tier,
    }
}

/// Generate a question for an arbitrary tier label.
///
/// Unknown labels fall back to the easy tier.
pub fn generate_for_label(label: &str, rng: &mut impl Rng) -> Question {
    generate(Tier::from_label(label), rng)
}

impl Question {
    /// Learner-facing prompt text, e.g. `"12 × 7 = ?"`.
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.operand_a, self.operator, self.operand_b)
    }

    /// Check a learner's reply.
    pub fn check(&self, answer: i64) -> AnswerOutcome {
        if answer == self.expected_answer {
            AnswerOutcome {
                correct: true,
                points_earned: self.point_value,
                message: "Resposta correta! 🎉".to_string(),
            }
        } else {
            AnswerOutcome {
                correct: false,
                points_earned: 0,
                message: format!(
                    "Resposta incorreta. A resposta certa era {}.",
                    self.expected_answer
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn answers_are_consistent_with_operator() {
        let mut rng = rng(7);
        for _ in 0..500 {
            for tier in [Tier::Easy, Tier::Medium, Tier::Hard] {
                let q = generate(tier, &mut rng);
                let expected = match q.operator {
                    Operator::Add => q.operand_a + q.operand_b,
                    Operator::Sub => q.operand_a - q.operand_b,
                    Operator::Mul => q.operand_a * q.operand_b,
                    Operator::Div => q.operand_a / q.operand_b,
                };
                assert_eq!(q.expected_answer, expected, "{}", q.prompt());
            }
        }
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = rng(11);
        for _ in 0..500 {
            let q = generate(Tier::Hard, &mut rng);
            if q.operator == Operator::Sub {
                assert!(q.operand_a >= q.operand_b);
                assert!(q.expected_answer >= 0);
            }
        }
    }

    #[test]
    fn division_is_exact_with_bounded_parts() {
        let mut rng = rng(13);
        let mut saw_division = false;
        for _ in 0..500 {
            let q = generate(Tier::Hard, &mut rng);
            if q.operator == Operator::Div {
                saw_division = true;
                assert_eq!(q.operand_a, q.operand_b * q.expected_answer);
                assert!((2..=10).contains(&q.operand_b));
                assert!((2..=10).contains(&q.expected_answer));
            }
        }
        assert!(saw_division);
    }

    #[test]
    fn multiplication_operands_in_drill_range() {
        let mut rng = rng(17);
        for _ in 0..500 {
            let q = generate(Tier::Medium, &mut rng);
            if q.operator == Operator::Mul {
                assert!((2..=12).contains(&q.operand_a));
                assert!((2..=12).contains(&q.operand_b));
            }
        }
    }

    #[test]
    fn operands_respect_tier_range() {
        let mut rng = rng(19);
        for _ in 0..500 {
            let q = generate(Tier::Easy, &mut rng);
            if matches!(q.operator, Operator::Add | Operator::Sub) {
                assert!((1..=10).contains(&q.operand_a));
                assert!((1..=10).contains(&q.operand_b));
            }
        }
    }

    #[test]
    fn points_match_tier() {
        let mut rng = rng(23);
        assert_eq!(generate(Tier::Easy, &mut rng).point_value, 10);
        assert_eq!(generate(Tier::Medium, &mut rng).point_value, 20);
        assert_eq!(generate(Tier::Hard, &mut rng).point_value, 30);
    }

    #[test]
    fn easy_tier_never_multiplies_or_divides() {
        let mut rng = rng(29);
        for _ in 0..200 {
            let q = generate(Tier::Easy, &mut rng);
            assert!(matches!(q.operator, Operator::Add | Operator::Sub));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_drill() {
        let questions_a: Vec<Question> = {
            let mut rng = rng(42);
            (0..20).map(|_| generate(Tier::Hard, &mut rng)).collect()
        };
        let questions_b: Vec<Question> = {
            let mut rng = rng(42);
            (0..20).map(|_| generate(Tier::Hard, &mut rng)).collect()
        };
        for (a, b) in questions_a.iter().zip(&questions_b) {
            assert_eq!(a.prompt(), b.prompt());
            assert_eq!(a.expected_answer, b.expected_answer);
        }
    }

    #[test]
    fn unknown_label_falls_back_to_easy() {
        let mut rng = rng(31);
        let q = generate_for_label("impossivel", &mut rng);
        assert_eq!(q.tier, Tier::Easy);
        assert_eq!(q.point_value, 10);
    }

    #[test]
    fn check_awards_points_only_when_correct() {
        let q = Question {
            operator: Operator::Mul,
            operand_a: 6,
            operand_b: 7,
            expected_answer: 42,
            point_value: 20,
            tier: Tier::Medium,
        };
        let right = q.check(42);
        assert!(right.correct);
        assert_eq!(right.points_earned, 20);
        assert_eq!(right.message, "Resposta correta! 🎉");

        let wrong = q.check(41);
        assert!(!wrong.correct);
        assert_eq!(wrong.points_earned, 0);
        assert!(wrong.message.contains("42"));
    }

    #[test]
    fn prompt_formats_operator_symbol() {
        let q = Question {
            operator: Operator::Div,
            operand_a: 42,
            operand_b: 6,
            expected_answer: 7,
            point_value: 30,
            tier: Tier::Hard,
        };
        assert_eq!(q.prompt(), "42 ÷ 6 = ?");
    }
}
