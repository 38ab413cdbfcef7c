//! prepdrill — timed aptitude & code-output practice in the terminal.
//!
//! Loads a question bank from a JSON file or URL, lets you configure and
//! take a timed attempt, scores it, and shows a per-question review.
//!
//! - **Bank**: one JSON document, loaded once per run (`questions.json`
//!   next to the binary by default, or `--bank <path-or-url>`)
//! - **Session**: a guarded `setup → active → finished` state machine
//!   with a one-second countdown and a frozen per-attempt pool
//! - **Scoring**: one definition of correct shared by the scorecard,
//!   the review screen, and the exported report
//!
//! # Quick Start
//!
//! ```ignore
//! use prepdrill::{config::QuizConfig, pool, session::QuizSession};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let bank = prepdrill::bank::parse_bank(json, "questions.json")?;
//! let config = QuizConfig::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = QuizSession::new();
//! session.start(pool::select_pool(&bank, &config, &mut rng), config.time_limit_minutes);
//! ```

pub mod bank;
pub mod cli;
pub mod config;
pub mod errors;
pub mod pool;
pub mod report;
pub mod score;
pub mod session;
pub mod telemetry;
pub mod ui;
