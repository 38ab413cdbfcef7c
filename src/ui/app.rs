//! Application shell: key dispatch and render dispatch per phase.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use ratatui::Frame;

use crate::bank::QuestionRecord;
use crate::config::{
    QuizConfig, MAX_POOL_SIZE, MAX_TIME_LIMIT_MINUTES, MIN_POOL_SIZE, MIN_TIME_LIMIT_MINUTES,
};
use crate::pool;
use crate::report;
use crate::session::{Phase, QuizSession};

use super::{active, review, setup};

/// Which setup-screen field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    PoolSize,
    TimeLimit,
    IncludeCode,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::PoolSize => SetupField::TimeLimit,
            SetupField::TimeLimit => SetupField::IncludeCode,
            SetupField::IncludeCode => SetupField::PoolSize,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::PoolSize => SetupField::IncludeCode,
            SetupField::TimeLimit => SetupField::PoolSize,
            SetupField::IncludeCode => SetupField::TimeLimit,
        }
    }
}

/// Step sizes for the setup-screen numeric fields.
const POOL_STEP: i64 = 5;
const TIME_STEP: i64 = 5;

/// The main application: the loaded bank, the editable configuration,
/// the session state machine, and the per-view scratch state (input
/// buffer, highlights, scroll offsets).
pub struct App {
    pub bank: Vec<QuestionRecord>,
    pub config: QuizConfig,
    pub session: QuizSession,
    rng: StdRng,
    /// Focused field on the setup screen.
    pub setup_field: SetupField,
    /// Free-text answer buffer, mirrored into the session on each edit.
    pub input: String,
    /// Cursor position in `input`, in characters.
    pub cursor: usize,
    /// Highlighted option for multiple-choice questions.
    pub selected_option: usize,
    pub show_explanation: bool,
    pub review_scroll: usize,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(bank: Vec<QuestionRecord>, config: QuizConfig, rng: StdRng) -> Self {
        Self {
            bank,
            config,
            session: QuizSession::new(),
            rng,
            setup_field: SetupField::PoolSize,
            input: String::new(),
            cursor: 0,
            selected_option: 0,
            show_explanation: false,
            review_scroll: 0,
            status: String::new(),
            should_quit: false,
        }
    }

    /// Render the screen for the current phase.
    pub fn render(&self, frame: &mut Frame) {
        match self.session.phase() {
            Phase::Setup => setup::render(self, frame),
            Phase::Active => active::render(self, frame),
            Phase::Finished => review::render(self, frame),
        }
    }

    /// One second of wall-clock time.
    pub fn on_tick(&mut self) {
        let was_active = self.session.phase() == Phase::Active;
        self.session.tick();
        if was_active && self.session.phase() == Phase::Finished {
            self.status = "Time's up — attempt submitted automatically".to_string();
            self.review_scroll = 0;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any phase; raw mode means we see it as a key.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.session.phase() {
            Phase::Setup => self.on_setup_key(key),
            Phase::Active => self.on_active_key(key),
            Phase::Finished => self.on_review_key(key),
        }
    }

    // ── Setup ──────────────────────────────────────────────────────

    fn on_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.setup_field = self.setup_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.setup_field = self.setup_field.prev(),
            KeyCode::Left | KeyCode::Char('-') => self.adjust_field(-1),
            KeyCode::Right | KeyCode::Char('+') => self.adjust_field(1),
            KeyCode::Char(' ') => {
                if self.setup_field == SetupField::IncludeCode {
                    self.config.include_code = !self.config.include_code;
                }
            }
            KeyCode::Enter | KeyCode::Char('s') => self.start_attempt(),
            _ => {}
        }
    }

    /// Adjust the focused field, clamped to the supported bounds.
    fn adjust_field(&mut self, direction: i64) {
        match self.setup_field {
            SetupField::PoolSize => {
                let v = self.config.pool_size as i64 + direction * POOL_STEP;
                self.config.pool_size = v.clamp(MIN_POOL_SIZE as i64, MAX_POOL_SIZE as i64) as usize;
            }
            SetupField::TimeLimit => {
                let v = self.config.time_limit_minutes as i64 + direction * TIME_STEP;
                self.config.time_limit_minutes =
                    v.clamp(MIN_TIME_LIMIT_MINUTES as i64, MAX_TIME_LIMIT_MINUTES as i64) as u64;
            }
            SetupField::IncludeCode => {
                self.config.include_code = !self.config.include_code;
            }
        }
    }

    /// Select a fresh pool and start an attempt. Also serves retake:
    /// the session accepts a start from `Finished`.
    fn start_attempt(&mut self) {
        let selected = pool::select_pool(&self.bank, &self.config, &mut self.rng);
        if selected.is_empty() {
            self.status = "No eligible questions for this configuration".to_string();
            return;
        }
        if self.session.start(selected, self.config.time_limit_minutes) {
            self.show_explanation = false;
            self.review_scroll = 0;
            self.status.clear();
            self.sync_question_view();
        }
    }

    // ── Active ─────────────────────────────────────────────────────

    fn on_active_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('e') => self.show_explanation = !self.show_explanation,
                KeyCode::Char('r') => {
                    self.session.clear_answers();
                    self.sync_question_view();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.session.exit();
                self.status.clear();
            }
            KeyCode::Tab => self.navigate(true),
            KeyCode::BackTab => self.navigate(false),
            _ => {
                let multiple_choice = self
                    .session
                    .current_question()
                    .is_some_and(|q| q.is_multiple_choice());
                if multiple_choice {
                    self.on_choice_key(key);
                } else {
                    self.on_free_text_key(key);
                }
            }
        }
    }

    fn on_choice_key(&mut self, key: KeyEvent) {
        let option_count = self
            .session
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0);
        match key.code {
            KeyCode::Up => self.selected_option = self.selected_option.saturating_sub(1),
            KeyCode::Down => {
                if self.selected_option + 1 < option_count {
                    self.selected_option += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let picked = self
                    .session
                    .current_question()
                    .and_then(|q| q.options.get(self.selected_option))
                    .cloned();
                if let Some(value) = picked {
                    self.session.answer(&value);
                }
            }
            KeyCode::Left => self.navigate(false),
            KeyCode::Right => self.navigate(true),
            _ => {}
        }
    }

    fn on_free_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_index();
                self.input.insert(at, c);
                self.cursor += 1;
                let value = self.input.clone();
                self.session.answer(&value);
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index();
                    self.input.remove(at);
                    let value = self.input.clone();
                    self.session.answer(&value);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor < self.input.chars().count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                if self.session.is_last_question() {
                    self.submit();
                } else {
                    self.navigate(true);
                }
            }
            _ => {}
        }
    }

    fn navigate(&mut self, forward: bool) {
        if forward {
            self.session.next();
        } else {
            self.session.prev();
        }
        self.sync_question_view();
    }

    fn submit(&mut self) {
        self.session.submit();
        if self.session.phase() == Phase::Finished {
            self.review_scroll = 0;
            self.status.clear();
        }
    }

    /// Byte offset of the character cursor in the input buffer.
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Load the view buffers for the current question: highlight the
    /// recorded option, or refill the free-text buffer.
    fn sync_question_view(&mut self) {
        let index = self.session.current_index();
        let Some(question) = self.session.current_question() else {
            return;
        };
        if question.is_multiple_choice() {
            self.selected_option = self
                .session
                .answer_for(index)
                .and_then(|ans| question.options.iter().position(|o| o == ans))
                .unwrap_or(0);
            self.input.clear();
            self.cursor = 0;
        } else {
            self.input = self
                .session
                .answer_for(index)
                .unwrap_or_default()
                .to_string();
            self.cursor = self.input.chars().count();
        }
    }

    // ── Review ─────────────────────────────────────────────────────

    fn on_review_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.review_scroll = self.review_scroll.saturating_sub(1),
            KeyCode::Down => self.scroll_review(1),
            KeyCode::PageUp => self.review_scroll = self.review_scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll_review(10),
            KeyCode::Char('b') => {
                self.session.back();
                self.status.clear();
            }
            KeyCode::Char('r') => self.start_attempt(),
            KeyCode::Char('e') => self.export_report(),
            _ => {}
        }
    }

    fn scroll_review(&mut self, by: usize) {
        let max = review::line_count(&self.session).saturating_sub(1);
        self.review_scroll = (self.review_scroll + by).min(max);
    }

    fn export_report(&mut self) {
        match report::write_report(&self.session) {
            Ok(path) => self.status = format!("Report written to {}", path.display()),
            Err(e) => self.status = format!("Could not write report: {}", e),
        }
    }
}
