//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use std::path::PathBuf;

use bettersync::config::{ConfigError, ConfigErrorKind, GlobalSettings};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing or malformed config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unreadable ignore-rule file, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error.kind() {
        ConfigErrorKind::DeserializeError => {
            eprintln!("\nCheck that the file is valid JSON and field values have the right types.");
        }
        ConfigErrorKind::InvalidConfiguration => {
            eprintln!("\nEvery directoriesToSync and filesToSync entry needs a source and a destination.");
        }
        ConfigErrorKind::AccessDenied => {
            eprintln!("\nThe file may be locked by another process.");
        }
        _ => {}
    }
}

/// Prints the locations searched for a configuration file.
pub fn print_search_hint(candidates: &[PathBuf]) {
    eprintln!("\nSearched:");
    for candidate in candidates {
        eprintln!("  {}", candidate.display());
    }
    eprintln!("\nUse '-f <path>' to point at a configuration file.");
}

/// Picks the default log level: `--verbose` wins over the configured level.
pub fn log_level(verbose: bool, settings: &GlobalSettings) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        settings.tracing_level().unwrap_or(Level::INFO)
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool, settings: &GlobalSettings) {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level(verbose, settings).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if settings.tracing_level().is_none() {
        tracing::warn!(
            "Unknown log level '{}', falling back to Info",
            settings.log_level
        );
    }
}
