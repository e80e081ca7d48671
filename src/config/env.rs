//! Process environment lookup and destination path layout.

use std::fmt;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::defaults;

/// Values taken from the process environment.
///
/// Both are required: the application-data directory anchors every
/// destination path and the user name replaces the `%USERNAME%` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Per-user application-data base directory (`%APPDATA%` on Windows)
    pub app_data: PathBuf,
    /// Current OS user name
    pub user_name: String,
}

impl Environment {
    /// Creates an environment from explicit values.
    #[must_use]
    pub fn new(app_data: impl Into<PathBuf>, user_name: impl Into<String>) -> Self {
        Self {
            app_data: app_data.into(),
            user_name: user_name.into(),
        }
    }

    /// Reads the environment of the current process.
    ///
    /// `APPDATA` falls back to the platform config directory, `USERNAME`
    /// falls back to `USER`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironment`] if a value cannot be resolved.
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok(), dirs::config_dir)
    }

    /// Resolves the environment from injectable lookups (used by tests).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironment`] if a value cannot be resolved.
    pub fn resolve<V, D>(var: V, config_dir: D) -> Result<Self, ConfigError>
    where
        V: Fn(&str) -> Option<String>,
        D: FnOnce() -> Option<PathBuf>,
    {
        let app_data = var("APPDATA")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(config_dir)
            .ok_or(ConfigError::MissingEnvironment { name: "APPDATA" })?;

        let user_name = var("USERNAME")
            .filter(|v| !v.is_empty())
            .or_else(|| var("USER").filter(|v| !v.is_empty()))
            .ok_or(ConfigError::MissingEnvironment { name: "USERNAME" })?;

        Ok(Self {
            app_data,
            user_name,
        })
    }

    /// Directory where MicroSIP reads its configuration and contacts.
    #[must_use]
    pub fn client_dir(&self) -> PathBuf {
        self.app_data.join(defaults::CLIENT_DIR_NAME)
    }

    /// Destination of the merged configuration, named after the primary fragment.
    #[must_use]
    pub fn merged_config_path(&self, primary_fragment: &Path) -> PathBuf {
        let name = primary_fragment
            .file_name()
            .map_or_else(|| PathBuf::from(defaults::MERGED_CONFIG_FILE_NAME), PathBuf::from);
        self.client_dir().join(name)
    }

    /// Destination of the exported contact list.
    #[must_use]
    pub fn contacts_path(&self) -> PathBuf {
        self.client_dir().join(defaults::CONTACTS_FILE_NAME)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment {{ app_data: {}, user: {} }}",
            self.app_data.display(),
            self.user_name
        )
    }
}
