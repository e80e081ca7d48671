//! Phone number normalization for MicroSIP dialing.

/// Digit dialed instead of the international prefix for national calls.
pub const TRUNK_PREFIX: &str = "0";

/// Characters removed from every number.
const PUNCTUATION: [char; 4] = [' ', '-', '(', ')'];

/// Turns an address book number into a number MicroSIP can dial.
///
/// The first occurrence of `dial_prefix` becomes [`TRUNK_PREFIX`], then
/// spaces, dashes and parentheses are removed and the result is trimmed.
/// Only the first occurrence of the prefix is replaced, even when the same
/// digit sequence appears again later in the number.
///
/// Normalizing an already normalized number changes it again when the
/// result still contains the prefix: either a second occurrence, or one
/// that punctuation split apart (`"+4 9 30"` becomes `"+4930"`).
///
/// ```
/// use microsip_bridge::contacts::normalize_number;
///
/// assert_eq!(normalize_number("+49 (0)30-1234567", "+49"), "00301234567");
/// ```
#[must_use]
pub fn normalize_number(raw: &str, dial_prefix: &str) -> String {
    let replaced = if dial_prefix.is_empty() {
        raw.to_string()
    } else {
        raw.replacen(dial_prefix, TRUNK_PREFIX, 1)
    };

    replaced
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
