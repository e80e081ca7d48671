//! MicroSIP configuration merging.
//!
//! MicroSIP reads a single UTF-16 INI file. Deployments keep a primary
//! fragment (with a `%USERNAME%` placeholder) and one fragment per account;
//! [`FragmentMerger`] splices them into the file MicroSIP reads.

mod encoding;
mod merger;


pub use encoding::{UTF16LE_BOM, decode_utf16, decode_utf16le, encode_utf16le};
pub use merger::{FragmentMerger, USER_PLACEHOLDER, strip_stray_lead};

use std::path::PathBuf;

use thiserror::Error;

/// Error type for merging configuration fragments.
///
/// Every variant aborts the run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The destination directory could not be created.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A fragment could not be read.
    #[error("Failed to read fragment '{}': {source}", path.display())]
    Read {
        /// Fragment path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A fragment decoded to no text at all.
    #[error("Fragment '{}' is empty", path.display())]
    EmptyFragment {
        /// Fragment path
        path: PathBuf,
    },

    /// The merged file could not be written.
    #[error("Failed to write merged config '{}': {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
