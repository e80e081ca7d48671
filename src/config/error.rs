//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, environment lookup, and file operations.
/// Every variant is fatal: the run never starts without a valid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read settings file '{}': {source}", path.display())]
    FileRead {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML settings.
    #[error("Failed to parse TOML settings: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write the settings file (for init command).
    #[error("Failed to write settings file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No settings file was given and none was found in the lookup paths.
    #[error("No settings file found. Searched:\n{}", format_searched(searched))]
    SettingsNotFound {
        /// Every candidate path that was checked
        searched: Vec<PathBuf>,
    },

    /// Missing required field that must be provided by the settings file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// A configured local path does not exist (or has the wrong kind).
    #[error("{field} '{}' does not exist or is not a {expected}", path.display())]
    PathNotFound {
        /// Name of the field the path came from
        field: &'static str,
        /// The offending path
        path: PathBuf,
        /// Kind of path that was expected
        expected: &'static str,
    },

    /// Invalid address book URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A required environment variable is not set.
    #[error("Environment variable {name} is not set")]
    MissingEnvironment {
        /// Name of the variable (the primary one, fallbacks are implied)
        name: &'static str,
    },
}

/// Well-known field names for `MissingRequired` and `PathNotFound` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The MicroSIP executable.
    pub const MICROSIP_PATH: &str = "microsip.path";
    /// The primary MicroSIP configuration fragment.
    pub const MICROSIP_CONFIG: &str = "microsip.config";
    /// The secondary (account) configuration fragments.
    pub const MICROSIP_ACCOUNTS: &str = "microsip.accounts";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}

fn format_searched(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
