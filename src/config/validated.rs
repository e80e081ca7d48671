//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::addressbook::AddressBook;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{AddressBookEntry, TomlConfig};

/// Fully validated configuration ready for use by the application.
///
/// Constructed once at startup and passed by reference to every stage.
/// All referenced local paths existed at validation time.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// MicroSIP executable
    pub microsip_path: PathBuf,

    /// Primary configuration fragment
    pub primary_fragment: PathBuf,

    /// Account fragments, appended in this order
    pub account_fragments: Vec<PathBuf>,

    /// Address books, fetched in this order
    pub address_books: Vec<AddressBook>,

    /// Timeout applied to every address book request
    pub http_timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let books = self
            .address_books
            .iter()
            .map(|b| b.url().as_str())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Config {{ microsip: {}, config: {}, accounts: {}, address_books: [{}], timeout: {}s }}",
            self.microsip_path.display(),
            self.primary_fragment.display(),
            self.account_fragments.len(),
            books,
            self.http_timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and the TOML settings.
    ///
    /// CLI arguments take precedence over TOML values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`microsip.path`, `microsip.config`)
    /// - A configured path does not exist
    /// - An address book URL is invalid
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: &TomlConfig) -> Result<Self, ConfigError> {
        let microsip_path = toml.microsip.path.clone().ok_or_else(|| {
            ConfigError::missing(field::MICROSIP_PATH, "Set microsip.path in settings file")
        })?;
        require_file(field::MICROSIP_PATH, &microsip_path)?;

        let primary_fragment = toml.microsip.config.clone().ok_or_else(|| {
            ConfigError::missing(field::MICROSIP_CONFIG, "Set microsip.config in settings file")
        })?;
        require_file(field::MICROSIP_CONFIG, &primary_fragment)?;

        for account in &toml.microsip.accounts {
            require_file(field::MICROSIP_ACCOUNTS, account)?;
        }

        let address_books = toml
            .address_books
            .iter()
            .map(parse_address_book)
            .collect::<Result<Vec<_>, _>>()?;

        let http_timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            microsip_path,
            primary_fragment,
            account_fragments: toml.microsip.accounts.clone(),
            address_books,
            http_timeout,
            verbose: cli.verbose || toml.verbose,
        })
    }

    /// Loads the settings file and validates it against the CLI arguments.
    ///
    /// If `cli.config` is set, that file is used; otherwise the first
    /// existing file from [`defaults::settings_candidates`] is used.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No settings file can be found
    /// - The settings file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = match cli.config {
            Some(ref path) => path.clone(),
            None => discover_settings(&defaults::settings_candidates())?,
        };

        tracing::debug!("Using settings file {}", path.display());
        let toml = TomlConfig::load(&path)?;

        Self::from_raw(cli, &toml)
    }

    fn resolve_timeout(cli: &Cli, toml: &TomlConfig) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or(toml.http.timeout)
            .unwrap_or(defaults::HTTP_TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "http.timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Returns the first candidate that is an existing file.
///
/// # Errors
///
/// Returns [`ConfigError::SettingsNotFound`] listing all candidates if none exists.
pub fn discover_settings(candidates: &[PathBuf]) -> Result<PathBuf, ConfigError> {
    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| ConfigError::SettingsNotFound {
            searched: candidates.to_vec(),
        })
}

/// Writes the default settings template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn require_file(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::PathNotFound {
            field,
            path: path.to_path_buf(),
            expected: "file",
        })
    }
}

fn parse_address_book(entry: &AddressBookEntry) -> Result<AddressBook, ConfigError> {
    let url = Url::parse(&entry.url).map_err(|e| ConfigError::InvalidUrl {
        url: entry.url.clone(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            url: entry.url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(AddressBook::new(url, &entry.user, &entry.password))
}
