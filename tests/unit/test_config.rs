//! Unit tests for the quiz configuration
//!
//! Tests cover:
//! - Defaults and TOML parsing
//! - Bound clamping at the load edge
//! - Explicit config paths

use std::io::Write;

use prepdrill::config::{
    QuizConfig, MAX_POOL_SIZE, MAX_TIME_LIMIT_MINUTES, MIN_POOL_SIZE, MIN_TIME_LIMIT_MINUTES,
};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_explicit_path() {
    let file = config_file("pool_size = 40\ntime_limit_minutes = 60\ninclude_code = false");
    let config = QuizConfig::load(file.path().to_str()).expect("config loads");
    assert_eq!(config.pool_size, 40);
    assert_eq!(config.time_limit_minutes, 60);
    assert!(!config.include_code);
}

#[test]
fn test_load_missing_explicit_path_is_error() {
    assert!(QuizConfig::load(Some("/nonexistent/prepdrill.toml")).is_err());
}

#[test]
fn test_load_invalid_toml_is_error() {
    let file = config_file("pool_size = [[");
    assert!(QuizConfig::load(file.path().to_str()).is_err());
}

#[test]
fn test_out_of_bounds_values_are_clamped_on_load() {
    let file = config_file("pool_size = 1\ntime_limit_minutes = 9999");
    let config = QuizConfig::load(file.path().to_str()).expect("config loads");
    assert_eq!(config.pool_size, MIN_POOL_SIZE);
    assert_eq!(config.time_limit_minutes, MAX_TIME_LIMIT_MINUTES);
}

#[test]
fn test_bank_location_from_config() {
    let file = config_file("bank = \"https://example.com/q.json\"");
    let config = QuizConfig::load(file.path().to_str()).expect("config loads");
    assert_eq!(config.bank.as_deref(), Some("https://example.com/q.json"));
}

#[test]
fn test_clamp_is_idempotent() {
    let mut config = QuizConfig {
        pool_size: 10_000,
        time_limit_minutes: 1,
        ..Default::default()
    };
    config.clamp();
    let once = config.clone();
    config.clamp();
    assert_eq!(config, once);
    assert_eq!(config.pool_size, MAX_POOL_SIZE);
    assert_eq!(config.time_limit_minutes, MIN_TIME_LIMIT_MINUTES);
}
