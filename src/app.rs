//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use microsip_bridge::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), also when some address books failed.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing settings, missing paths, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - merge, inspection, or export failure.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::SettingsNotFound { .. } | ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'microsip-bridge init' to generate a settings template.");
        }
        ConfigError::MissingRequired { field: f, .. }
            if *f == field::MICROSIP_PATH || *f == field::MICROSIP_CONFIG =>
        {
            eprintln!("\nRun 'microsip-bridge init' to see every available setting.");
        }
        ConfigError::MissingEnvironment { .. } => {
            eprintln!("\nAPPDATA and USERNAME must be set (USER is accepted on Unix).");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
