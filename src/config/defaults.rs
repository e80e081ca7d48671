//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;
use std::time::Duration;

/// Name of the settings file looked up when `--config` is not given.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Directories searched (in order) for [`SETTINGS_FILE_NAME`].
pub const SETTINGS_LOOKUP_DIRS: &[&str] = &[
    ".",
    "/usr/local/etc/microsip-bridge",
    "/usr/local/opt/microsip-bridge",
    "/etc/microsip-bridge",
    "/opt/microsip-bridge",
];

/// Default per-request HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Directory below the application-data base where MicroSIP keeps its files.
pub const CLIENT_DIR_NAME: &str = "MicroSIP";

/// Name of the merged configuration when the primary fragment path has no file name.
pub const MERGED_CONFIG_FILE_NAME: &str = "MicroSIP.ini";

/// File name of the exported contact list.
pub const CONTACTS_FILE_NAME: &str = "Contacts.xml";

/// Default HTTP timeout as Duration.
#[must_use]
pub const fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}

/// Candidate settings file paths, in lookup order.
#[must_use]
pub fn settings_candidates() -> Vec<PathBuf> {
    SETTINGS_LOOKUP_DIRS
        .iter()
        .map(|dir| PathBuf::from(dir).join(SETTINGS_FILE_NAME))
        .collect()
}
