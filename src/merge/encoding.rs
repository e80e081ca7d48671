//! UTF-16 helpers for MicroSIP configuration files.
//!
//! Decoding is lossy: odd trailing bytes and unpaired surrogates become
//! U+FFFD. `encoding_rs` only decodes UTF-16, so encoding is done here.

use encoding_rs::UTF_16LE;

/// Byte-order mark of a UTF-16LE file.
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Decodes UTF-16LE without looking at a byte-order mark.
///
/// A leading BOM is kept as a U+FEFF character.
#[must_use]
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let (text, _had_errors) = UTF_16LE.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Decodes UTF-16, honoring a little- or big-endian BOM.
///
/// Without a BOM the bytes are read as little-endian. The BOM itself is
/// not part of the result.
#[must_use]
pub fn decode_utf16(bytes: &[u8]) -> String {
    let (text, _encoding, _had_errors) = UTF_16LE.decode(bytes);
    text.into_owned()
}

/// Encodes text as UTF-16LE, without a byte-order mark.
#[must_use]
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}
