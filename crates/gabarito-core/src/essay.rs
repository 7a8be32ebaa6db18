//! Rule-based essay evaluator.
//!
//! Scores free text against three additive, independently-capped criteria:
//! length (30), technical vocabulary (40), and structure/cohesion (30).
//! The criterion sum classifies the essay into a level with a fixed
//! pt-BR summary message.

use std::collections::HashSet;

use crate::model::{EssayLevel, EssayScore};

/// Technology vocabulary.
pub const TECHNOLOGY_TERMS: &[&str] = &[
    "computador",
    "software",
    "hardware",
    "internet",
    "digital",
    "programação",
    "código",
    "algoritmo",
    "dados",
    "sistema",
];

/// Education vocabulary.
pub const EDUCATION_TERMS: &[&str] = &[
    "aprendizado",
    "ensino",
    "escola",
    "conhecimento",
    "estudo",
    "pedagogia",
    "curriculum",
    "aluno",
    "professor",
    "sala de aula",
];

/// Robotics vocabulary.
pub const ROBOTICS_TERMS: &[&str] = &[
    "arduino",
    "sensor",
    "motor",
    "automação",
    "robô",
    "circuito",
    "programação",
    "engenharia",
    "maker",
];

/// AI vocabulary.
pub const AI_TERMS: &[&str] = &[
    "inteligência artificial",
    "machine learning",
    "rede neural",
    "algoritmo",
    "automação",
    "dados",
    "predição",
    "modelo",
];

/// All vocabulary categories. Terms repeated across categories count once.
pub const LEXICON: &[&[&str]] = &[
    TECHNOLOGY_TERMS,
    EDUCATION_TERMS,
    ROBOTICS_TERMS,
    AI_TERMS,
];

/// Transitional phrases used as a cohesion signal.
pub const CONNECTIVES: &[&str] = &[
    "porque",
    "portanto",
    "assim",
    "além disso",
    "contudo",
    "entretanto",
    "logo",
    "consequentemente",
    "primeiro",
    "finalmente",
];

/// Evaluate an essay against the built-in lexicon.
///
/// `topic` is accepted and carried through to records but does not select
/// a sub-lexicon; every category always applies.
pub fn evaluate(text: &str, topic: &str) -> EssayScore {
    evaluate_with(text, topic, LEXICON, CONNECTIVES)
}

/// Evaluate with explicit vocabulary and connective tables.
///
/// Matching is case-insensitive substring containment, not whole-word: a
/// term appearing inside an unrelated word counts. Each table entry counts
/// at most once.
pub fn evaluate_with(
    text: &str,
    _topic: &str,
    lexicon: &[&[&str]],
    connectives: &[&str],
) -> EssayScore {
    let text_lower = text.to_lowercase();
    let word_count = text.split_whitespace().count();
    let sentence_count = text
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
        .max(1);

    let mut score = 0u32;
    let mut details = Vec::with_capacity(3);

    // 1. Length (up to 30 points)
    if word_count >= 100 {
        score += 30;
        details.push("✅ Texto com extensão excelente (100+ palavras)".to_string());
    } else if word_count >= 50 {
        score += 20;
        details.push(
            "⚠️ Texto com boa extensão, mas pode ser mais detalhado".to_string(),
        );
    } else if word_count >= 20 {
        score += 10;
        details.push("❌ Texto muito curto. Desenvolva mais suas ideias.".to_string());
    } else {
        details.push(
            "❌ Texto insuficiente. Mínimo recomendado: 20 palavras.".to_string(),
        );
    }

    // 2. Technical vocabulary (up to 40 points)
    let matched: HashSet<&str> = lexicon
        .iter()
        .flat_map(|category| category.iter())
        .filter(|term| text_lower.contains(**term))
        .copied()
        .collect();
    let technical_term_count = matched.len();

    if technical_term_count >= 5 {
        score += 40;
        details.push(format!(
            "✅ Excelente uso de vocabulário técnico ({technical_term_count} termos relevantes)"
        ));
    } else if technical_term_count >= 3 {
        score += 25;
        details.push(format!(
            "⚠️ Bom vocabulário, mas pode incluir mais termos técnicos ({technical_term_count} encontrados)"
        ));
    } else {
        details.push(
            "❌ Poucos termos técnicos. Tente incluir conceitos específicos do tema."
                .to_string(),
        );
    }

    // 3. Structure and cohesion (up to 30 points)
    let connective_count = connectives
        .iter()
        .filter(|phrase| text_lower.contains(**phrase))
        .count();
    let words_per_sentence = word_count as f64 / sentence_count as f64;

    if connective_count >= 3 && words_per_sentence >= 8.0 {
        score += 30;
        details.push("✅ Excelente estrutura lógica e coesão textual".to_string());
    } else if connective_count >= 1 {
        score += 15;
        details.push(
            "⚠️ Estrutura adequada, mas pode melhorar a conexão entre ideias".to_string(),
        );
    } else {
        details.push(
            "❌ Use mais conectivos para melhorar a coesão do texto".to_string(),
        );
    }

    let level = EssayLevel::from_score(score);
    let message = match level {
        EssayLevel::Advanced => "Parabéns! Você demonstrou domínio excepcional do tema.",
        EssayLevel::Proficient => "Muito bom! Você tem boa compreensão do assunto.",
        EssayLevel::Intermediate => {
            "Bom começo! Há espaço para aprofundar seus conhecimentos."
        }
        EssayLevel::Beginner => "Continue estudando! Tente desenvolver mais suas respostas.",
    };

    EssayScore {
        level,
        score,
        message: message.to_string(),
        details,
        word_count,
        sentence_count,
        technical_term_count,
    }
}
