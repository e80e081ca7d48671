//! Remote address book retrieval.
//!
//! This module provides types and traits for:
//! - Describing a remote address book ([`AddressBook`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Fetching and parsing every book, best-effort ([`ContactFetcher`])

mod book;
mod client;
mod error;
mod fetcher;
mod http;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use book::{AddressBook, EXPORT_QUERY};
pub use client::ReqwestClient;
pub use error::{FetchError, HttpError};
pub use fetcher::{BookFailure, ContactFetcher, FetchOutcome};
pub use http::{HttpClient, HttpRequest, HttpResponse};
