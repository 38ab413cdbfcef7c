//! Scoring: one definition of "correct", applied everywhere.

use std::collections::HashMap;

use serde::Serialize;

use crate::bank::QuestionRecord;

/// How one question came out. `judge` is the single definition of
/// correct shared by the scorer, the review screen, and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Correct,
    Wrong,
    Skipped,
}

impl Verdict {
    /// No recorded answer is a skip. Otherwise compare the trimmed
    /// submission against the trimmed canonical value, case-sensitively.
    /// A question with no canonical value can never be correct.
    pub fn judge(question: &QuestionRecord, submitted: Option<&str>) -> Verdict {
        let Some(submitted) = submitted else {
            return Verdict::Skipped;
        };
        match question.canonical_answer() {
            Some(canonical) if submitted.trim() == canonical.trim() => Verdict::Correct,
            _ => Verdict::Wrong,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Verdict::Correct => "✓",
            Verdict::Wrong => "✗",
            Verdict::Skipped => "—",
        }
    }
}

/// Aggregate counts for one attempt. `correct + wrong + skipped == total`
/// by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub skipped: usize,
}

impl std::fmt::Display for Scorecard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total: {}   Correct: {}   Wrong: {}   Skipped: {}",
            self.total, self.correct, self.wrong, self.skipped
        )
    }
}

/// Score a frozen pool against the recorded answers. Pure and idempotent.
pub fn score(pool: &[QuestionRecord], answers: &HashMap<String, String>) -> Scorecard {
    let mut card = Scorecard {
        total: pool.len(),
        ..Default::default()
    };
    for question in pool {
        match Verdict::judge(question, answers.get(&question.id).map(String::as_str)) {
            Verdict::Correct => card.correct += 1,
            Verdict::Wrong => card.wrong += 1,
            Verdict::Skipped => card.skipped += 1,
        }
    }
    card
}
