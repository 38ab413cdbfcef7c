use std::path::PathBuf;
use thiserror::Error;

/// The central error type for prepdrill.
///
/// Loader and configuration failures carry enough context to be shown
/// verbatim to the user; everything else is handled by state-machine
/// guards and never becomes an error.
#[derive(Error, Debug)]
pub enum PrepdrillError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The question bank could not be fetched or understood.
///
/// Every variant names the location the bank was expected at, so the
/// blocking error message tells the user where to put the file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read the question bank at {location}: {message} — place a questions.json there or pass --bank")]
    Unreachable { location: String, message: String },

    #[error("the question bank at {location} returned HTTP status {status}")]
    HttpStatus { location: String, status: u16 },

    #[error("the question bank at {location} is not valid JSON: {message}")]
    Parse { location: String, message: String },

    #[error("the question bank at {location} has an unsupported shape: {message}")]
    Shape { location: String, message: String },

    #[error("the question bank at {location} contains duplicate question id '{id}'")]
    DuplicateId { location: String, id: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to parse config: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PrepdrillError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_LOAD_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<PrepdrillError>() {
        return match err {
            PrepdrillError::Load(_) => EXIT_LOAD_ERROR,
            PrepdrillError::Config(_) => EXIT_CONFIG_ERROR,
            _ => EXIT_ERROR,
        };
    }

    // Direct enum unwraps fallback
    if e.downcast_ref::<LoadError>().is_some() {
        return EXIT_LOAD_ERROR;
    }
    if e.downcast_ref::<ConfigError>().is_some() {
        return EXIT_CONFIG_ERROR;
    }

    EXIT_ERROR
}
