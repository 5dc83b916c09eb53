//! Path Assertions
//!
//! [`PathAssert`] wraps a subject path. Each check reads the filesystem at call time,
//! returns the handle on success so checks chain with `?`, and returns a
//! [`CheckError`] otherwise:
//!
//! ```no_run
//! use pathspect::assert_that;
//!
//! # fn main() -> Result<(), pathspect::CheckError> {
//! assert_that("target/dir").exists()?.is_directory()?.has_parent("target")?;
//! # Ok(())
//! # }
//! ```

mod content;
mod digest;
mod directory;
mod existence;
mod ordering;
mod permissions;
mod structure;

use crate::charset::Charset;
use crate::config::AssertConfig;
use crate::error::{AssertionFailure, CheckError, EvaluationError};
use crate::probe::{self, EntryKind};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Start a chain of checks on `path` with default configuration.
pub fn assert_that(path: impl AsRef<Path>) -> PathAssert {
    PathAssert::new(path.as_ref().to_path_buf(), AssertConfig::default())
}

/// Start a chain of checks on `path` with an explicit configuration.
///
/// The configured charset becomes the handle's charset; an unknown label falls back
/// to UTF-8 and is reported once through `tracing`. Use [`AssertConfig::validate`]
/// beforehand to reject it instead.
pub fn assert_that_with(path: impl AsRef<Path>, config: &AssertConfig) -> PathAssert {
    PathAssert::new(path.as_ref().to_path_buf(), config.clone())
}

/// Assertion handle over a single subject path.
#[derive(Debug, Clone)]
pub struct PathAssert {
    subject: PathBuf,
    charset: Charset,
    /// Charset for other files compared against the subject; `using_charset` leaves it alone.
    default_charset: Charset,
    config: AssertConfig,
}

impl PathAssert {
    fn new(subject: PathBuf, config: AssertConfig) -> Self {
        let charset = config.charset().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to UTF-8");
            Charset::utf_8()
        });
        Self {
            subject,
            charset,
            default_charset: charset,
            config,
        }
    }

    pub fn subject(&self) -> &Path {
        &self.subject
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Decode textual content with `charset` in subsequent checks.
    pub fn using_charset(mut self, charset: impl Into<Charset>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Decode textual content with the charset named by `label` (e.g. `"windows-1254"`).
    pub fn using_charset_label(self, label: &str) -> Result<Self, EvaluationError> {
        let charset = Charset::for_label(label)?;
        Ok(self.using_charset(charset))
    }

    /// Run one check, tracing its outcome.
    fn check<F>(&self, name: &'static str, evaluate: F) -> Result<&Self, CheckError>
    where
        F: FnOnce() -> Result<(), CheckError>,
    {
        debug!(subject = %self.subject.display(), check = name, "Evaluating check");
        match evaluate() {
            Ok(()) => {
                debug!(subject = %self.subject.display(), check = name, "Check passed");
                Ok(self)
            }
            Err(CheckError::Failed(failure)) => {
                debug!(
                    subject = %self.subject.display(),
                    check = name,
                    expected = %failure.expected,
                    "Check failed"
                );
                Err(failure.into())
            }
            Err(CheckError::Evaluation(err)) => {
                warn!(
                    subject = %self.subject.display(),
                    check = name,
                    error = %err,
                    "Check could not be evaluated"
                );
                Err(err.into())
            }
        }
    }

    fn failure(&self, expected: impl Into<String>, actual: impl Into<String>) -> AssertionFailure {
        AssertionFailure::new(&self.subject, expected, actual)
    }

    /// `Ok` when `holds`, otherwise a failure built from `expected` and `actual`.
    fn ensure(
        &self,
        holds: bool,
        expected: impl Into<String>,
        actual: impl FnOnce() -> String,
    ) -> Result<(), CheckError> {
        if holds {
            Ok(())
        } else {
            Err(self.failure(expected, actual()).into())
        }
    }

    /// The subject, after following links, must be a regular file. Returns its
    /// metadata so size checks need no second stat.
    fn require_regular_file(&self) -> Result<Metadata, CheckError> {
        let metadata = probe::stat(&self.subject, true)?;
        let kind = metadata.as_ref().map(EntryKind::of);
        match metadata {
            Some(metadata) if kind == Some(EntryKind::RegularFile) => Ok(metadata),
            _ => Err(self
                .failure("be a regular file", probe::describe(kind))
                .into()),
        }
    }

    /// The subject, after following links, must be a directory.
    fn require_directory(&self) -> Result<(), CheckError> {
        let kind = probe::entry_kind(&self.subject, true)?;
        self.ensure(kind == Some(EntryKind::Directory), "be a directory", || {
            probe::describe(kind)
        })
    }

    /// Render a list of paths for a failure detail block, truncated per config.
    fn format_entries(&self, entries: &[&Path]) -> String {
        let limit = self.config.max_listed_entries;
        let mut out = String::from("Entries:");
        for entry in entries.iter().take(limit) {
            out.push_str(&format!("\n  {}", entry.display()));
        }
        if entries.len() > limit {
            out.push_str(&format!("\n  ... and {} more", entries.len() - limit));
        }
        out
    }
}
