//! Dial plan inspection.
//!
//! MicroSIP accounts may carry a `dialPlan` option. The international
//! prefix found there (`+` and one to three digits) is what phone numbers
//! are normalized against; without one, [`DEFAULT_DIAL_PREFIX`] is used.

mod ini;
mod inspect;

#[cfg(test)]
mod inspect_tests;

pub use ini::{IniDocument, IniSection};
pub use inspect::{DIAL_PLAN_OPTION, InspectError, find_dial_prefix, inspect_dial_prefix};

use std::fmt;

/// Prefix used when no section defines a dial plan.
pub const DEFAULT_DIAL_PREFIX: &str = "+49";

/// An international dialing prefix such as `+49`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialPrefix(String);

impl DialPrefix {
    /// Accepts exactly `+` followed by one to three ASCII digits.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('+')?;
        let valid = (1..=3).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit());
        valid.then(|| Self(value.to_string()))
    }

    /// The prefix text, including the `+`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DialPrefix {
    fn default() -> Self {
        Self(DEFAULT_DIAL_PREFIX.to_string())
    }
}

impl fmt::Display for DialPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
