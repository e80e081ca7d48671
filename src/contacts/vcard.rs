//! vCard export parsing.
//!
//! An export is a concatenation of cards. It is split on the
//! [`RECORD_TERMINATOR`] marker, the segment after the last marker is
//! dropped, and every block gets its marker back before being parsed.
//! Only the properties the contact list needs (`FN`, `ORG`, `TEL`) are kept.

use thiserror::Error;

use super::{ContactRecord, PhoneEntry, PhoneKind};

/// Marker that ends every card of an export.
pub const RECORD_TERMINATOR: &str = "END:VCARD";

/// Escaped line break some exports carry as literal text.
const ESCAPED_LINE_BREAK: &str = "\\r\\n";

/// Error type for a malformed card.
///
/// One malformed card fails the whole export it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The block does not start with `BEGIN:VCARD`.
    #[error("card does not start with BEGIN:VCARD")]
    MissingBegin,

    /// The block does not end with `END:VCARD`.
    #[error("card does not end with END:VCARD")]
    MissingEnd,

    /// A content line has no `name:value` shape.
    #[error("malformed content line '{line}'")]
    MalformedLine {
        /// The offending (unfolded) line
        line: String,
    },
}

/// Splits a raw export into cards and parses each of them.
///
/// Literal `\r\n` escape sequences are turned into real line breaks first.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial list is returned.
pub fn parse_export(export: &str) -> Result<Vec<ContactRecord>, ParseError> {
    let export = export.replace(ESCAPED_LINE_BREAK, "\n");
    let mut blocks: Vec<&str> = export.split(RECORD_TERMINATOR).collect();
    blocks.pop();

    blocks
        .into_iter()
        .map(|block| parse_record(&format!("{block}{RECORD_TERMINATOR}\n")))
        .collect()
}

/// Parses one complete card (`BEGIN:VCARD` .. `END:VCARD`).
///
/// # Errors
///
/// Returns [`ParseError`] if the card is not delimited properly or a line
/// cannot be split into name and value.
pub fn parse_record(card: &str) -> Result<ContactRecord, ParseError> {
    let lines = unfold(card);

    let (first, last) = match (lines.first(), lines.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ParseError::MissingBegin),
    };
    if !is_marker(first, "BEGIN") {
        return Err(ParseError::MissingBegin);
    }
    if lines.len() < 2 || !is_marker(last, "END") {
        return Err(ParseError::MissingEnd);
    }

    let mut record = ContactRecord::default();
    let mut has_org = false;

    for line in &lines[1..lines.len() - 1] {
        let content = ContentLine::parse(line)?;
        match content.name.as_str() {
            "FN" if record.full_name.is_none() => {
                record.full_name = Some(unescape(content.value));
            }
            "ORG" if !has_org => {
                record.organization = first_component(content.value);
                has_org = true;
            }
            "TEL" => {
                let kind = content.first_type().map_or(PhoneKind::Other, PhoneKind::from_type);
                let number = strip_tel_scheme(content.value.trim());
                record.phones.push(PhoneEntry::new(number, kind));
            }
            _ => {}
        }
    }

    Ok(record)
}

/// A `[group.]NAME[;PARAM...]:VALUE` line.
struct ContentLine<'a> {
    name: String,
    params: Vec<(String, Vec<String>)>,
    value: &'a str,
}

impl<'a> ContentLine<'a> {
    fn parse(line: &'a str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedLine {
            line: line.to_string(),
        };

        let colon = find_unquoted(line, ':').ok_or_else(malformed)?;
        let (head, value) = (&line[..colon], &line[colon + 1..]);

        let mut parts = split_unquoted(head, ';').into_iter();
        let name = parts.next().map(str::trim).unwrap_or_default();
        let name = name.rsplit('.').next().unwrap_or(name);
        if name.is_empty() {
            return Err(malformed());
        }

        let params = parts
            .filter(|p| !p.trim().is_empty())
            .map(|p| match p.split_once('=') {
                Some((key, values)) => (key.trim().to_ascii_uppercase(), param_values(values)),
                // vCard 2.1 bare parameter, e.g. TEL;CELL:...
                None => ("TYPE".to_string(), param_values(p)),
            })
            .collect();

        Ok(Self {
            name: name.to_ascii_uppercase(),
            params,
            value,
        })
    }

    fn first_type(&self) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == "TYPE")
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }
}

fn is_marker(line: &str, name: &str) -> bool {
    line.split_once(':').is_some_and(|(key, value)| {
        key.trim().eq_ignore_ascii_case(name) && value.trim().eq_ignore_ascii_case("VCARD")
    })
}

/// Joins folded lines and drops blank ones.
fn unfold(card: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in card.lines() {
        if let Some(rest) = raw.strip_prefix([' ', '\t']) {
            if let Some(last) = lines.last_mut() {
                last.push_str(rest);
                continue;
            }
        }
        if !raw.trim().is_empty() {
            lines.push(raw.to_string());
        }
    }
    lines
}

fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    let mut quoted = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => quoted = !quoted,
            c if c == needle && !quoted => return Some(i),
            _ => {}
        }
    }
    None
}

fn split_unquoted(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;
    while let Some(i) = find_unquoted(rest, delimiter) {
        parts.push(&rest[..i]);
        rest = &rest[i + delimiter.len_utf8()..];
    }
    parts.push(rest);
    parts
}

fn param_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim().trim_matches('"').trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// First `;`-separated component of a structured value, unescaped.
fn first_component(value: &str) -> String {
    let mut escaped = false;
    for (i, c) in value.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ';' => return unescape(&value[..i]),
            _ => {}
        }
    }
    unescape(value)
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(escaped @ (',' | ';' | '\\' | ':')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn strip_tel_scheme(number: &str) -> &str {
    match number.get(..4) {
        Some(scheme) if scheme.eq_ignore_ascii_case("tel:") => &number[4..],
        _ => number,
    }
}
