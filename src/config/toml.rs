//! TOML settings file parsing.
//!
//! Defines the structure of the settings file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root structure of the settings file.
///
/// Fields are optional here; presence and path existence are checked
/// later by [`ValidatedConfig`](super::ValidatedConfig).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// MicroSIP executable and configuration fragments
    #[serde(default)]
    pub microsip: MicroSipSection,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpSection,

    /// Remote address books, exported in the listed order
    #[serde(default, rename = "address_book")]
    pub address_books: Vec<AddressBookEntry>,
}

/// MicroSIP section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MicroSipSection {
    /// Path to the MicroSIP executable
    pub path: Option<PathBuf>,

    /// Path to the primary configuration fragment
    pub config: Option<PathBuf>,

    /// Paths to the account fragments appended after the primary one
    #[serde(default)]
    pub accounts: Vec<PathBuf>,
}

/// HTTP section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// One `[[address_book]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressBookEntry {
    /// Address book URL (without the `?export` query)
    pub url: String,

    /// User name for basic authentication
    pub user: String,

    /// Password (or app token) for basic authentication
    pub password: String,
}

impl TomlConfig {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default settings file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# microsip-bridge settings

# Enable verbose logging (can also be enabled with --verbose)
# verbose = false

[microsip]
# MicroSIP executable (required)
# path = 'C:\Program Files\MicroSIP\microsip.exe'

# Primary configuration fragment, UTF-16LE (required)
# Every %USERNAME% in it is replaced with the current user name.
# config = 'C:\MicroSIP-Deploy\MicroSIP.ini'

# Account fragments appended after the primary fragment, in order
# accounts = ['C:\MicroSIP-Deploy\account1.ini']

[http]
# Timeout per address book request in seconds (default: 30)
# timeout = 30

# Nextcloud address books, exported in this order
# [[address_book]]
# url = "https://cloud.example.com/remote.php/dav/addressbooks/users/alice/contacts"
# user = "alice"
# password = "app-password"
"#
    .to_string()
}
