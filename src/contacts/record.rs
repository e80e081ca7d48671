//! Contact records as parsed from an address book export.

use std::fmt;

/// Kind of a phone entry, taken from the first `TYPE` of a `TEL` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKind {
    /// `TYPE=HOME`
    Home,
    /// `TYPE=WORK`
    Work,
    /// `TYPE=CELL`
    Cell,
    /// Anything else, or no type at all
    Other,
}

impl PhoneKind {
    /// Maps a vCard type value (case-insensitive) to a phone kind.
    #[must_use]
    pub fn from_type(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "HOME" => Self::Home,
            "WORK" => Self::Work,
            "CELL" => Self::Cell,
            _ => Self::Other,
        }
    }

    /// Label shown in the MicroSIP contact name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Cell => "Mobile",
            Self::Other => "Voice",
        }
    }
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One phone number of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEntry {
    /// Number as stored in the address book (not normalized)
    pub number: String,
    /// Kind of the number
    pub kind: PhoneKind,
}

impl PhoneEntry {
    /// Creates a phone entry.
    #[must_use]
    pub fn new(number: impl Into<String>, kind: PhoneKind) -> Self {
        Self {
            number: number.into(),
            kind,
        }
    }
}

/// One contact of an address book.
///
/// The organization is always present; cards without an `ORG` property
/// carry an empty string. A card without `FN` parses fine but cannot be
/// exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    /// Formatted display name (`FN`)
    pub full_name: Option<String>,
    /// First component of `ORG`, or empty
    pub organization: String,
    /// Phone entries in card order
    pub phones: Vec<PhoneEntry>,
}

impl ContactRecord {
    /// Creates a record with a display name and organization and no phones.
    #[must_use]
    pub fn new(full_name: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            organization: organization.into(),
            phones: Vec::new(),
        }
    }

    /// Adds a phone entry.
    #[must_use]
    pub fn with_phone(mut self, number: impl Into<String>, kind: PhoneKind) -> Self {
        self.phones.push(PhoneEntry::new(number, kind));
        self
    }
}
