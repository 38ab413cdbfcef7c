//! Quiz session state machine.
//!
//! One attempt moves `Setup → Active → Finished`; the only way back is an
//! explicit reset (back / exit) or a retake. All transitions are guarded
//! methods — an out-of-phase call is a no-op, never a panic — so the
//! session can never hold an invalid combination (index out of bounds,
//! finished attempt with a live countdown, and so on).

use std::collections::HashMap;

use tracing::{debug, info};

use crate::bank::QuestionRecord;
use crate::score::{self, Scorecard, Verdict};

/// The current stage of a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Active,
    Finished,
}

/// State for one quiz attempt. The pool is snapshotted at `start` and
/// frozen for the attempt's duration; recomputing the selector while a
/// session runs never touches it.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pool: Vec<QuestionRecord>,
    current_index: usize,
    answers: HashMap<String, String>,
    remaining_seconds: Option<u64>,
    phase: Phase,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
            current_index: 0,
            answers: HashMap::new(),
            remaining_seconds: None,
            phase: Phase::Setup,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pool(&self) -> &[QuestionRecord] {
        &self.pool
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.pool.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        !self.pool.is_empty() && self.current_index + 1 == self.pool.len()
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    /// The recorded answer for the question at `index`, if any.
    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.pool
            .get(index)
            .and_then(|q| self.answers.get(&q.id))
            .map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn remaining_seconds(&self) -> Option<u64> {
        self.remaining_seconds
    }

    /// Start an attempt with the given frozen pool snapshot.
    ///
    /// Guarded: refused while a session is already active, and refused
    /// for an empty pool — the active view never has to render a
    /// zero-length pool. Returns whether the attempt started.
    pub fn start(&mut self, pool: Vec<QuestionRecord>, time_limit_minutes: u64) -> bool {
        if self.phase == Phase::Active || pool.is_empty() {
            return false;
        }
        info!(
            pool = pool.len(),
            minutes = time_limit_minutes,
            "starting attempt"
        );
        self.pool = pool;
        self.current_index = 0;
        self.answers.clear();
        self.remaining_seconds = Some(time_limit_minutes * 60);
        self.phase = Phase::Active;
        true
    }

    /// Record (or overwrite) the answer for the current question. Last
    /// write wins per question id; an empty value removes the entry, so
    /// an erased free-text answer reverts to skipped. Never advances the
    /// index.
    pub fn answer(&mut self, value: &str) {
        if self.phase != Phase::Active {
            return;
        }
        let Some(question) = self.pool.get(self.current_index) else {
            return;
        };
        if value.is_empty() {
            self.answers.remove(&question.id);
        } else {
            self.answers
                .insert(question.id.clone(), value.to_string());
        }
    }

    /// Move to the previous question; no-op at the first.
    pub fn prev(&mut self) {
        if self.phase == Phase::Active && self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Move to the next question; no-op at the last (the view offers
    /// submit there instead).
    pub fn next(&mut self) {
        if self.phase == Phase::Active && self.current_index + 1 < self.pool.len() {
            self.current_index += 1;
        }
    }

    /// Finish the attempt, freezing further answer mutation. Idempotent:
    /// only an active session can finish, so a manual submit and the
    /// automatic timeout can never both fire.
    pub fn submit(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        info!(answered = self.answers.len(), "attempt submitted");
        self.phase = Phase::Finished;
    }

    /// One second of countdown. Only an active session ticks; at zero the
    /// attempt finishes exactly as an explicit submit would, exactly
    /// once. Ticks delivered after the phase left `Active` are ignored,
    /// so a late tick can never mutate a finished session.
    pub fn tick(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        let Some(remaining) = self.remaining_seconds else {
            return;
        };
        let remaining = remaining.saturating_sub(1);
        self.remaining_seconds = Some(remaining);
        if remaining == 0 {
            info!("time limit reached, finishing attempt");
            self.phase = Phase::Finished;
        }
    }

    /// Leave the review for the configuration screen.
    pub fn back(&mut self) {
        if self.phase == Phase::Finished {
            self.reset_to_setup();
        }
    }

    /// Abandon the attempt (or leave the review) for the configuration
    /// screen, clearing answers and index.
    pub fn exit(&mut self) {
        if self.phase != Phase::Setup {
            self.reset_to_setup();
        }
    }

    /// Wipe the recorded answers and return to the first question
    /// without leaving the attempt.
    pub fn clear_answers(&mut self) {
        if self.phase == Phase::Active {
            debug!("clearing recorded answers");
            self.answers.clear();
            self.current_index = 0;
        }
    }

    fn reset_to_setup(&mut self) {
        debug!("resetting session to setup");
        self.pool.clear();
        self.current_index = 0;
        self.answers.clear();
        self.remaining_seconds = None;
        self.phase = Phase::Setup;
    }

    /// Score the frozen pool against the recorded answers.
    pub fn score(&self) -> Scorecard {
        score::score(&self.pool, &self.answers)
    }

    /// Verdict for the question at `index`, using the same definition of
    /// correct as the aggregate score.
    pub fn verdict_for(&self, index: usize) -> Option<Verdict> {
        self.pool
            .get(index)
            .map(|q| Verdict::judge(q, self.answers.get(&q.id).map(String::as_str)))
    }
}
