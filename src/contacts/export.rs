//! MicroSIP `Contacts.xml` rendering.
//!
//! MicroSIP expects a UTF-8 file with a byte-order mark, an XML
//! declaration and one `<contact>` element per dialable number.

use std::path::{Path, PathBuf};

use quick_xml::escape::escape;
use thiserror::Error;

use crate::dialplan::DialPrefix;

use super::{ContactRecord, PhoneEntry, normalize_number};

const BOM: char = '\u{feff}';

/// XML declaration written after the byte-order mark.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;

/// Why a single record could not be rendered.
///
/// The record is skipped; the rest of the export is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The card had no `FN` property.
    #[error("contact has no display name")]
    MissingName,
}

/// Error type for writing the contact list.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination directory could not be created.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The contact list could not be written.
    #[error("Failed to write contact list '{}': {source}", path.display())]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Counts reported after an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// `<contact>` elements written
    pub contacts: usize,
    /// Records skipped because they could not be rendered
    pub skipped_records: usize,
}

/// Renders the `<contact>` lines of one record, one per phone entry.
///
/// # Errors
///
/// Returns [`RenderError`] if the record lacks data needed for any line;
/// no line of that record is produced then.
pub fn render_record(
    record: &ContactRecord,
    dial_prefix: &DialPrefix,
) -> Result<Vec<String>, RenderError> {
    let full_name = record.full_name.as_deref().ok_or(RenderError::MissingName)?;
    let organization = if record.organization.is_empty() {
        String::new()
    } else {
        format!("{}, ", record.organization)
    };

    Ok(record
        .phones
        .iter()
        .map(|phone| contact_line(phone, full_name, &organization, dial_prefix))
        .collect())
}

fn contact_line(
    phone: &PhoneEntry,
    full_name: &str,
    organization: &str,
    dial_prefix: &DialPrefix,
) -> String {
    let number = normalize_number(&phone.number, dial_prefix.as_str());
    let name = format!("{full_name} ({organization}{})", phone.kind.label());

    format!(
        r#"<contact number="{}" name="{}" presence="0" directory="0" ></contact>"#,
        escape(number.as_str()),
        escape(name.as_str()),
    )
}

/// Renders the complete document, skipping records that fail to render.
#[must_use]
pub fn render_contacts(
    records: &[ContactRecord],
    dial_prefix: &DialPrefix,
) -> (String, ExportSummary) {
    let mut summary = ExportSummary::default();
    let mut document = String::new();
    document.push(BOM);
    document.push_str(XML_DECLARATION);
    document.push('\n');
    document.push_str("<contacts>\n");

    for record in records {
        match render_record(record, dial_prefix) {
            Ok(lines) => {
                summary.contacts += lines.len();
                for line in lines {
                    document.push_str(&line);
                    document.push('\n');
                }
            }
            Err(e) => {
                tracing::debug!("Skipping contact with {} numbers: {e}", record.phones.len());
                summary.skipped_records += 1;
            }
        }
    }

    document.push_str("</contacts>\n");
    (document, summary)
}

/// Writes the contact list to `path`, replacing any previous export.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory or file cannot be written.
pub fn export_contacts(
    path: &Path,
    records: &[ContactRecord],
    dial_prefix: &DialPrefix,
) -> Result<ExportSummary, ExportError> {
    tracing::info!("Writing {} ...", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let (document, summary) = render_contacts(records, dial_prefix);
    std::fs::write(path, document).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        "Writing {} ... done ({} contacts, {} skipped)",
        path.display(),
        summary.contacts,
        summary.skipped_records
    );
    Ok(summary)
}
