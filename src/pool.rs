//! Pool selection: filter, shuffle, truncate.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bank::{QuestionKind, QuestionRecord};
use crate::config::QuizConfig;

fn is_eligible(question: &QuestionRecord, config: &QuizConfig) -> bool {
    match question.kind {
        QuestionKind::Aptitude => true,
        QuestionKind::Code => config.include_code,
    }
}

/// How many bank questions the current configuration makes eligible.
/// Drives the setup screen's pool-size preview.
pub fn eligible_count(questions: &[QuestionRecord], config: &QuizConfig) -> usize {
    questions.iter().filter(|q| is_eligible(q, config)).count()
}

/// Select the pool for one attempt: filter by kind, shuffle with the
/// injected RNG (Fisher–Yates via `SliceRandom`, every permutation equally
/// likely), truncate to the configured size.
///
/// Pure in its inputs plus the RNG. Callers recompute this whenever the
/// bank or configuration changes; an active session keeps its own frozen
/// copy and is never touched by a recomputation.
pub fn select_pool<R: Rng>(
    questions: &[QuestionRecord],
    config: &QuizConfig,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let mut filtered: Vec<QuestionRecord> = questions
        .iter()
        .filter(|q| is_eligible(q, config))
        .cloned()
        .collect();
    filtered.shuffle(rng);
    filtered.truncate(config.pool_size);
    filtered
}
