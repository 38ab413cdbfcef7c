use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

pub const MIN_POOL_SIZE: usize = 5;
pub const MAX_POOL_SIZE: usize = 200;
pub const MIN_TIME_LIMIT_MINUTES: u64 = 5;
pub const MAX_TIME_LIMIT_MINUTES: u64 = 240;

/// Quiz configuration. Loaded from a TOML file and/or CLI flags, then
/// edited on the setup screen; fixed for the duration of one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How many questions one attempt draws from the bank.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Whether code-output questions are eligible for the pool.
    #[serde(default = "default_include_code")]
    pub include_code: bool,

    #[serde(default = "default_time_limit")]
    pub time_limit_minutes: u64,

    /// Bank location (path or URL). CLI --bank overrides this.
    pub bank: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            include_code: default_include_code(),
            time_limit_minutes: default_time_limit(),
            bank: None,
        }
    }
}

fn default_pool_size() -> usize {
    30
}
fn default_include_code() -> bool {
    true
}
fn default_time_limit() -> u64 {
    30
}

impl QuizConfig {
    /// Load configuration from an explicit path, or probe the default
    /// locations, falling back to defaults when no file exists.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let content =
                    std::fs::read_to_string(p).map_err(|e| ConfigError::Read {
                        path: PathBuf::from(p),
                        message: e.to_string(),
                    })?;
                Self::parse(&content)
            }
            None => {
                for p in Self::default_paths() {
                    if let Ok(content) = std::fs::read_to_string(&p) {
                        tracing::debug!(path = %p.display(), "using config file");
                        return Self::parse(&content);
                    }
                }
                Ok(Self::default())
            }
        }
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("prepdrill.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("prepdrill").join("config.toml"));
        }
        paths
    }

    fn parse(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.clamp();
        Ok(config)
    }

    /// Clamp pool size and time limit into the supported bounds. Applied
    /// at every input edge (file, CLI, setup screen) so an out-of-range
    /// value can never reach a session.
    pub fn clamp(&mut self) {
        self.pool_size = self.pool_size.clamp(MIN_POOL_SIZE, MAX_POOL_SIZE);
        self.time_limit_minutes = self
            .time_limit_minutes
            .clamp(MIN_TIME_LIMIT_MINUTES, MAX_TIME_LIMIT_MINUTES);
    }

    pub fn time_limit_seconds(&self) -> u64 {
        self.time_limit_minutes * 60
    }
}
