//! Address book descriptor.

use std::fmt;

use url::Url;

/// Query appended to an address book URL to request a full vCard export.
pub const EXPORT_QUERY: &str = "export";

/// One remote address book: where it lives and how to authenticate.
///
/// `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct AddressBook {
    url: Url,
    user: String,
    password: String,
}

impl AddressBook {
    /// Creates a new address book descriptor.
    #[must_use]
    pub fn new(url: Url, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url,
            user: user.into(),
            password: password.into(),
        }
    }

    /// The configured address book URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// User name for basic authentication.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Password for basic authentication.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The URL that returns every card of the book: `{url}/?export`.
    ///
    /// Trailing slashes on the configured URL are dropped first so the
    /// path does not end in `//`.
    #[must_use]
    pub fn export_url(&self) -> Url {
        let mut url = self.url.clone();
        let path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{path}/"));
        url.set_query(Some(EXPORT_QUERY));
        url
    }
}

impl fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressBook")
            .field("url", &self.url.as_str())
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}
