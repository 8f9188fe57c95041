//! Encoding-tolerant file reads.

use std::path::Path;

use encoding_rs::mem::decode_latin1;
use pipescan_core::errors::ScanError;

/// Decoded file content and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// `"utf-8"` or `"latin-1"`
    pub encoding: &'static str,
}

/// Read `path` as text. Only open/read failures are errors; undecodable
/// content always produces some text.
pub fn read_text(path: &Path) -> Result<DecodedText, ScanError> {
    let bytes = std::fs::read(path).map_err(|e| ScanError::from_io(path, e))?;
    let decoded = decode_bytes(bytes);
    if decoded.encoding != "utf-8" {
        tracing::debug!(
            path = %path.display(),
            encoding = decoded.encoding,
            "decoded with fallback encoding"
        );
    }
    Ok(decoded)
}

/// UTF-8 first, then Latin-1. Latin-1 maps every byte to a code point, so
/// no further fallback is needed.
pub fn decode_bytes(bytes: Vec<u8>) -> DecodedText {
    match String::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text,
            encoding: "utf-8",
        },
        Err(e) => DecodedText {
            text: decode_latin1(e.as_bytes()).into_owned(),
            encoding: "latin-1",
        },
    }
}
