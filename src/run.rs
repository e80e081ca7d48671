//! Application execution logic.
//!
//! This module runs the export pipeline once: merge the MicroSIP
//! configuration, inspect its dial plan, fetch every address book, and
//! write the contact list.

use thiserror::Error;
use url::Url;

use microsip_bridge::addressbook::{ContactFetcher, HttpClient, HttpError, ReqwestClient};
use microsip_bridge::config::{Environment, ValidatedConfig};
use microsip_bridge::contacts::{ExportError, ExportSummary, export_contacts};
use microsip_bridge::dialplan::{InspectError, inspect_dial_prefix};
use microsip_bridge::merge::{FragmentMerger, MergeError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for fatal runtime failures.
///
/// Address book failures are not listed here; they are logged and the
/// run continues without that book's contacts.
#[derive(Debug, Error)]
pub enum RunError {
    /// Merging the configuration fragments failed.
    #[error("Failed to merge MicroSIP config: {0}")]
    Merge(#[from] MergeError),

    /// Reading the merged configuration failed.
    #[error("Failed to inspect dial plan: {0}")]
    Inspect(#[from] InspectError),

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] HttpError),

    /// Writing the contact list failed.
    #[error("Failed to export contacts: {0}")]
    Export(#[from] ExportError),
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs of address books that could not be exported, in configuration order
    pub failed_books: Vec<Url>,
    /// Contact list counts
    pub export: ExportSummary,
}

/// Executes the pipeline with the production HTTP client.
///
/// # Errors
///
/// Returns an error if merging, inspection, client setup, or export fails.
///
/// Excluded from coverage - performs real network requests.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &ValidatedConfig, env: &Environment) -> Result<RunSummary, RunError> {
    let client = ReqwestClient::with_timeout(config.http_timeout).map_err(RunError::HttpClient)?;
    execute_with(config, env, client).await
}

/// Executes the pipeline with the given HTTP client.
///
/// The merge completes before the dial plan is inspected, and the dial
/// prefix is known before any contact is rendered.
///
/// # Errors
///
/// Returns an error if merging, inspection, or export fails.
pub async fn execute_with<H: HttpClient>(
    config: &ValidatedConfig,
    env: &Environment,
    client: H,
) -> Result<RunSummary, RunError> {
    let merger = FragmentMerger::new(
        env.merged_config_path(&config.primary_fragment),
        env.user_name.clone(),
    );
    merger.merge(&config.primary_fragment, &config.account_fragments)?;

    let dial_prefix = inspect_dial_prefix(merger.destination())?;

    let fetcher = ContactFetcher::new(client);
    let outcome = fetcher.fetch_all(&config.address_books).await;
    if !outcome.failures.is_empty() {
        tracing::warn!(
            "{} of {} address book(s) could not be exported",
            outcome.failures.len(),
            config.address_books.len()
        );
    }

    let export = export_contacts(&env.contacts_path(), &outcome.records, &dial_prefix)?;

    Ok(RunSummary {
        failed_books: outcome.failures.into_iter().map(|f| f.url).collect(),
        export,
    })
}
