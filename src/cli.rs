//! Command line entry: flags, config resolution, the one bank load, and
//! the hand-off to the UI.

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::bank::{self, BankSource};
use crate::config::QuizConfig;
use crate::telemetry;
use crate::ui;

/// Where the bank is expected when neither the CLI nor the config file
/// names a location.
pub const DEFAULT_BANK: &str = "questions.json";

#[derive(Parser)]
#[command(name = "prepdrill")]
#[command(about = "Timed aptitude & code-output practice quizzes in your terminal")]
#[command(version)]
struct Cli {
    /// Question bank location: a JSON file path or an http(s) URL
    #[arg(short, long, value_name = "PATH_OR_URL")]
    bank: Option<String>,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Number of questions per attempt (5-200)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pool_size: Option<usize>,

    /// Time limit in minutes (5-240)
    #[arg(short = 't', long, value_name = "MINUTES")]
    time_limit: Option<u64>,

    /// Exclude code-output questions from the pool
    #[arg(long)]
    no_code: bool,

    /// Seed the shuffle for a reproducible pool selection
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Verbose logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let mut config = QuizConfig::load(cli.config.as_deref())?;
    if let Some(n) = cli.pool_size {
        config.pool_size = n;
    }
    if let Some(minutes) = cli.time_limit {
        config.time_limit_minutes = minutes;
    }
    if cli.no_code {
        config.include_code = false;
    }
    config.clamp();
    debug!(?config, "effective configuration");

    let location = cli
        .bank
        .or_else(|| config.bank.clone())
        .unwrap_or_else(|| DEFAULT_BANK.to_string());
    let source = BankSource::parse(&location);

    // The single read per run; a failure here is terminal and the
    // message names the location the bank was expected at.
    let bank = bank::load_bank(&source).await?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    ui::run_app(bank, config, rng)
}
