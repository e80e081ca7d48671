//! Reads the merged MicroSIP configuration and finds the dial prefix.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::merge::decode_utf16;

use super::{DialPrefix, IniDocument};

/// Option that holds a MicroSIP dial plan (matched case-insensitively).
pub const DIAL_PLAN_OPTION: &str = "dialPlan";

static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+[0-9]{1,3}").expect("dial prefix pattern is valid"));

/// Error type for dial plan inspection.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The merged configuration could not be read.
    #[error("Failed to read merged config '{}': {source}", path.display())]
    Read {
        /// Path to the merged configuration
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Returns the first prefix found in a `dialPlan` option, in file order.
///
/// Sections are visited in order and the leftmost match of the first
/// section whose dial plan contains one wins.
#[must_use]
pub fn find_dial_prefix(document: &IniDocument) -> Option<DialPrefix> {
    document.sections().find_map(|section| {
        let plan = section.get(DIAL_PLAN_OPTION)?;
        let prefix = DialPrefix::parse(PREFIX_PATTERN.find(plan)?.as_str())?;
        tracing::debug!("Found dial prefix {prefix} in section [{}]", section.name());
        Some(prefix)
    })
}

/// Reads the merged configuration at `path` and returns its dial prefix,
/// or the default prefix when no dial plan defines one.
///
/// # Errors
///
/// Returns [`InspectError::Read`] if the file cannot be read.
pub fn inspect_dial_prefix(path: &Path) -> Result<DialPrefix, InspectError> {
    let bytes = std::fs::read(path).map_err(|e| InspectError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document = IniDocument::parse(&decode_utf16(&bytes));
    match find_dial_prefix(&document) {
        Some(prefix) => {
            tracing::info!("Using dial prefix {prefix} from {}", path.display());
            Ok(prefix)
        }
        None => {
            let prefix = DialPrefix::default();
            tracing::info!("No dial plan prefix found, using default {prefix}");
            Ok(prefix)
        }
    }
}
