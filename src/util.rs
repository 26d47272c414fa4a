//! Shared helpers for decoding document part bytes.

use std::borrow::Cow;

/// Decode part bytes to a string.
///
/// Tries UTF-8 first (the DOCX default; handles a BOM automatically via
/// encoding_rs) and falls back to Windows-1252, the encoding legacy Word
/// installs commonly produced. Returns a `Cow` to avoid allocation when the
/// input is already valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _encoding, _malformed) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
