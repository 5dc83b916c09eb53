//! Charset handling for textual content checks.

use crate::error::EvaluationError;
use encoding_rs::Encoding;
use std::fmt;

/// A text encoding used to decode content snapshots.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    pub fn utf_8() -> Self {
        Charset(encoding_rs::UTF_8)
    }

    /// Look up a charset by WHATWG label (`"utf-8"`, `"windows-1254"`, `"latin1"`, ...).
    pub fn for_label(label: &str) -> Result<Self, EvaluationError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Charset)
            .ok_or_else(|| EvaluationError::UnknownCharset(label.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode bytes, replacing malformed sequences. No BOM sniffing.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, _had_errors) = self.0.decode_without_bom_handling(bytes);
        text.into_owned()
    }

    pub fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, _encoding, _unmappable) = self.0.encode(text);
        bytes.into_owned()
    }
}

impl From<&'static Encoding> for Charset {
    fn from(encoding: &'static Encoding) -> Self {
        Charset(encoding)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Charset::utf_8()
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Charset({})", self.name())
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
