//! Merging the primary fragment and account fragments into one file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{MergeError, UTF16LE_BOM, decode_utf16, decode_utf16le, encode_utf16le};

/// Placeholder in the primary fragment replaced with the OS user name.
pub const USER_PLACEHOLDER: &str = "%USERNAME%";

/// Drops the first character unless it opens a section header.
///
/// Some writers put a stray character (typically a decoded byte-order
/// mark) before the first `[`.
#[must_use]
pub fn strip_stray_lead(content: &str) -> &str {
    match content.chars().next() {
        Some('[') | None => content,
        Some(c) => &content[c.len_utf8()..],
    }
}

/// Writes the merged MicroSIP configuration.
///
/// The destination is created (or truncated) with the primary fragment,
/// then every account fragment is appended in order. The file is UTF-16LE
/// with a single leading byte-order mark.
#[derive(Debug, Clone)]
pub struct FragmentMerger {
    destination: PathBuf,
    user_name: String,
}

impl FragmentMerger {
    /// Creates a merger writing to `destination`, substituting `user_name`.
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>, user_name: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            user_name: user_name.into(),
        }
    }

    /// Path of the merged file.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Merges `primary` and `accounts` into the destination file.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError`] on the first read or write failure. Fragments
    /// already appended at that point stay on disk.
    pub fn merge(&self, primary: &Path, accounts: &[PathBuf]) -> Result<(), MergeError> {
        tracing::info!("Setting MicroSIP config ...");

        self.ensure_parent_dir()?;

        let content = read_fragment(primary, decode_utf16le)?;
        let content = strip_stray_lead(&content).replace(USER_PLACEHOLDER, &self.user_name);

        let mut bytes = UTF16LE_BOM.to_vec();
        bytes.extend(encode_utf16le(&content));
        std::fs::write(&self.destination, bytes).map_err(|e| self.write_error(e))?;
        tracing::debug!(
            "Wrote primary fragment {} to {}",
            primary.display(),
            self.destination.display()
        );

        for account in accounts {
            let content = read_fragment(account, decode_utf16)?;
            self.append(strip_stray_lead(&content))?;
            tracing::debug!("Appended account fragment {}", account.display());
        }

        tracing::info!("Setting MicroSIP config ... done");
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<(), MergeError> {
        match self.destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
                .map_err(|e| MergeError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                }),
            _ => Ok(()),
        }
    }

    fn append(&self, content: &str) -> Result<(), MergeError> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.destination)
            .map_err(|e| self.write_error(e))?;
        file.write_all(&encode_utf16le(content))
            .map_err(|e| self.write_error(e))
    }

    fn write_error(&self, source: std::io::Error) -> MergeError {
        MergeError::Write {
            path: self.destination.clone(),
            source,
        }
    }
}

fn read_fragment(path: &Path, decode: fn(&[u8]) -> String) -> Result<String, MergeError> {
    let bytes = std::fs::read(path).map_err(|e| MergeError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let content = decode(&bytes);
    if content.is_empty() {
        return Err(MergeError::EmptyFragment {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}
