//! Sequential, best-effort retrieval of address book exports.

use url::Url;

use crate::contacts::{ContactRecord, parse_export};

use super::{AddressBook, FetchError, HttpClient, HttpRequest};

/// A book that could not be exported, with the reason.
#[derive(Debug)]
pub struct BookFailure {
    /// URL of the failed address book
    pub url: Url,
    /// Why it failed
    pub error: FetchError,
}

/// Result of fetching every configured address book.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Records of all books that succeeded, in book-then-record order
    pub records: Vec<ContactRecord>,
    /// Books that failed, in configuration order
    pub failures: Vec<BookFailure>,
}

/// Fetches vCard exports from address books and parses them into records.
///
/// Books are fetched one after another. A failing book is logged and
/// skipped; it never aborts the remaining books.
#[derive(Debug)]
pub struct ContactFetcher<H> {
    client: H,
}

impl<H: HttpClient> ContactFetcher<H> {
    /// Creates a fetcher using the given HTTP client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Fetches and parses a single address book.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the server answers with
    /// a non-2xx status, the body is not UTF-8, or a record is malformed.
    pub async fn fetch_book(&self, book: &AddressBook) -> Result<Vec<ContactRecord>, FetchError> {
        let request =
            HttpRequest::get(book.export_url()).with_basic_auth(book.user(), book.password())?;

        let response = self.client.request(request).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let body = response.body_text().ok_or(FetchError::Decode)?;
        Ok(parse_export(body)?)
    }

    /// Fetches every book in order, collecting records and failures.
    pub async fn fetch_all(&self, books: &[AddressBook]) -> FetchOutcome {
        tracing::info!("Getting Nextcloud address books ...");

        let mut outcome = FetchOutcome::default();
        for book in books {
            tracing::info!("Getting address book '{}' ...", book.url());
            match self.fetch_book(book).await {
                Ok(records) => {
                    tracing::info!(
                        "Got {} contacts from address book '{}'",
                        records.len(),
                        book.url()
                    );
                    outcome.records.extend(records);
                }
                Err(error) => {
                    tracing::error!("Error while getting address book '{}': {error}", book.url());
                    outcome.failures.push(BookFailure {
                        url: book.url().clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!("Getting Nextcloud address books ... done");
        outcome
    }
}
