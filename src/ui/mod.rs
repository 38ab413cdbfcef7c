//! Terminal UI.
//!
//! Pure presentation over the session state machine: one render module
//! per phase (setup, active, review), a palette, and the terminal
//! lifecycle wrapper. All state transitions happen in [`App::handle_key`]
//! and the one-second tick; rendering never mutates the session.

mod active;
mod app;
mod review;
mod setup;

pub use app::{App, SetupField};

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    Terminal,
};

use crate::bank::QuestionRecord;
use crate::config::QuizConfig;

/// How long the event poll blocks before the loop re-checks the tick
/// cadence (milliseconds).
const POLL_INTERVAL_MS: u64 = 100;

/// The prepdrill color palette.
pub struct Palette;

impl Palette {
    pub const ACCENT: Color = Color::Rgb(37, 99, 235);
    pub const CORRECT: Color = Color::Rgb(22, 163, 74);
    pub const WRONG: Color = Color::Rgb(220, 38, 38);
    pub const TEXT: Color = Color::Rgb(226, 232, 240);
    pub const MUTED: Color = Color::Rgb(100, 116, 139);
    pub const CODE_BG: Color = Color::Rgb(15, 23, 42);

    pub fn title_style() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn text_style() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn correct_style() -> Style {
        Style::default().fg(Self::CORRECT)
    }

    pub fn wrong_style() -> Style {
        Style::default().fg(Self::WRONG)
    }

    /// Style for the currently highlighted choice or field.
    pub fn selected_style() -> Style {
        Style::default()
            .bg(Self::ACCENT)
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn code_style() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::CODE_BG)
    }
}

/// Terminal wrapper for TUI operations.
pub struct TuiTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiTerminal {
    /// Create and initialize the terminal.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Restore the terminal BEFORE the panic message prints. A panic
        // inside the draw loop would otherwise leave raw mode and the
        // alternate screen active, hiding the error and breaking the
        // shell; the Drop impl may not run during an unwind.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal to its normal state.
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiTerminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Read the next terminal event with a timeout.
pub fn read_event(timeout_ms: u64) -> Result<Option<Event>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Countdown display: `MM : SS`, or a placeholder when no countdown is
/// active.
pub fn format_clock(remaining: Option<u64>) -> String {
    match remaining {
        Some(secs) => format!("{:02} : {:02}", secs / 60, secs % 60),
        None => "-- : --".to_string(),
    }
}

/// Run the quiz UI until the user quits.
///
/// The loop draws, polls for one key event, and delivers one session
/// tick per elapsed wall-clock second. Tick delivery is unconditional;
/// the session's phase guard makes it a no-op outside an active attempt,
/// which is what stops the countdown deterministically on every path
/// out of `Active`.
pub fn run_app(bank: Vec<QuestionRecord>, config: QuizConfig, rng: StdRng) -> Result<()> {
    let mut terminal = TuiTerminal::new()?;
    let mut app = App::new(bank, config, rng);
    let mut last_tick = Instant::now();

    loop {
        terminal.terminal().draw(|frame| app.render(frame))?;

        if let Some(Event::Key(key)) = read_event(POLL_INTERVAL_MS)? {
            if key.kind != KeyEventKind::Release {
                app.handle_key(key);
            }
        }

        while last_tick.elapsed() >= Duration::from_secs(1) {
            app.on_tick();
            last_tick += Duration::from_secs(1);
        }

        if app.should_quit {
            break;
        }
    }

    terminal.restore()?;
    Ok(())
}
