//! Content checks. Every call takes a fresh snapshot of the file.

use super::PathAssert;
use crate::charset::Charset;
use crate::diff;
use crate::error::CheckError;
use crate::probe;
use std::path::Path;

impl PathAssert {
    /// Regular file with no content.
    pub fn is_empty_file(&self) -> Result<&Self, CheckError> {
        self.check("is_empty_file", || {
            let size = self.require_regular_file()?.len();
            self.ensure(size == 0, "be an empty file", || {
                format!("it has {} bytes", size)
            })
        })
    }

    /// Regular file with at least one byte.
    pub fn is_not_empty_file(&self) -> Result<&Self, CheckError> {
        self.check("is_not_empty_file", || {
            let size = self.require_regular_file()?.len();
            self.ensure(size != 0, "not be an empty file", || {
                "it is empty".to_string()
            })
        })
    }

    /// Regular file whose content is exactly `size` bytes long.
    pub fn has_size(&self, size: u64) -> Result<&Self, CheckError> {
        self.check("has_size", || {
            let actual = self.require_regular_file()?.len();
            self.ensure(actual == size, format!("have size {} bytes", size), || {
                format!("its size is {} bytes", actual)
            })
        })
    }

    /// Content decoded with the handle's charset equals `expected`, line
    /// terminators included.
    pub fn has_content(&self, expected: &str) -> Result<&Self, CheckError> {
        self.check("has_content", || {
            self.require_regular_file()?;
            let actual = self.charset.decode(&probe::read_content(&self.subject)?);
            self.compare_text(
                &actual,
                expected,
                format!("have content (charset {}):\n  {:?}", self.charset, expected),
            )
        })
    }

    /// Decoded content equals the decoded content of `other`. The subject is decoded
    /// with the handle's charset, `other` with the configured default charset (UTF-8
    /// when the configured label is unknown).
    pub fn has_same_textual_content_as(
        &self,
        other: impl AsRef<Path>,
    ) -> Result<&Self, CheckError> {
        let other = other.as_ref();
        self.check("has_same_textual_content_as", || {
            self.same_textual_content(other, self.default_charset)
        })
    }

    /// Like [`has_same_textual_content_as`](Self::has_same_textual_content_as) with an
    /// explicit charset for `other`.
    pub fn has_same_textual_content_as_with(
        &self,
        other: impl AsRef<Path>,
        other_charset: impl Into<Charset>,
    ) -> Result<&Self, CheckError> {
        let other = other.as_ref();
        let other_charset = other_charset.into();
        self.check("has_same_textual_content_as", || {
            self.same_textual_content(other, other_charset)
        })
    }

    /// Byte-for-byte equality with `other`.
    pub fn has_same_binary_content_as(
        &self,
        other: impl AsRef<Path>,
    ) -> Result<&Self, CheckError> {
        let other = other.as_ref();
        self.check("has_same_binary_content_as", || {
            self.require_regular_file()?;
            let expected = probe::read_content(other)?;
            let actual = probe::read_content(&self.subject)?;
            self.compare_bytes(
                &actual,
                &expected,
                format!("have the same binary content as:\n  {}", other.display()),
            )
        })
    }

    /// Content equals `expected` exactly.
    pub fn has_binary_content(&self, expected: impl AsRef<[u8]>) -> Result<&Self, CheckError> {
        let expected = expected.as_ref();
        self.check("has_binary_content", || {
            self.require_regular_file()?;
            let actual = probe::read_content(&self.subject)?;
            self.compare_bytes(
                &actual,
                expected,
                format!("have binary content of {} bytes", expected.len()),
            )
        })
    }

    fn same_textual_content(&self, other: &Path, other_charset: Charset) -> Result<(), CheckError> {
        self.require_regular_file()?;
        let expected = other_charset.decode(&probe::read_content(other)?);
        let actual = self.charset.decode(&probe::read_content(&self.subject)?);
        self.compare_text(
            &actual,
            &expected,
            format!("have the same textual content as:\n  {}", other.display()),
        )
    }

    fn compare_text(&self, actual: &str, expected: &str, description: String) -> Result<(), CheckError> {
        if actual == expected {
            return Ok(());
        }
        let deltas = diff::line_deltas(expected, actual);
        Err(self
            .failure(description, "content differs")
            .with_detail(diff::format_line_deltas(&deltas))
            .into())
    }

    fn compare_bytes(&self, actual: &[u8], expected: &[u8], description: String) -> Result<(), CheckError> {
        match diff::first_byte_mismatch(expected, actual) {
            None => Ok(()),
            Some(mismatch) => Err(self
                .failure(
                    description,
                    format!(
                        "content differs {} (expected {} bytes, actual {} bytes)",
                        diff::format_byte_mismatch(&mismatch),
                        expected.len(),
                        actual.len()
                    ),
                )
                .into()),
        }
    }
}
