//! Checks on the textual form of the subject. Only `is_canonical` touches the
//! filesystem.

use super::PathAssert;
use crate::error::{CheckError, EvaluationError};
use crate::lexical::{self, Segments};
use std::path::Path;

fn describe_parent(parent: Option<Segments>) -> String {
    match parent {
        Some(parent) => format!("its parent is:\n  {}", parent.to_path_buf().display()),
        None => "it has no parent".to_string(),
    }
}

impl PathAssert {
    pub fn is_absolute(&self) -> Result<&Self, CheckError> {
        self.check("is_absolute", || {
            self.ensure(self.subject.is_absolute(), "be absolute", || {
                "it is relative".to_string()
            })
        })
    }

    pub fn is_relative(&self) -> Result<&Self, CheckError> {
        self.check("is_relative", || {
            self.ensure(self.subject.is_relative(), "be relative", || {
                "it is absolute".to_string()
            })
        })
    }

    /// No `.` segments and no `..` that could be collapsed against a preceding name.
    pub fn is_normalized(&self) -> Result<&Self, CheckError> {
        self.check("is_normalized", || {
            self.ensure(lexical::is_normalized(&self.subject), "be normalized", || {
                format!(
                    "its normalized form is:\n  {}",
                    lexical::normalize(&self.subject).display()
                )
            })
        })
    }

    /// The subject equals its fully resolved form. Resolution needs the path to exist.
    pub fn is_canonical(&self) -> Result<&Self, CheckError> {
        self.check("is_canonical", || {
            let canonical = dunce::canonicalize(&self.subject)
                .map_err(|e| EvaluationError::io(&self.subject, e))?;
            // Compare literally: `Path` equality would ignore interior `.` segments.
            let holds = canonical.as_os_str() == self.subject.as_os_str();
            self.ensure(holds, "be canonical", || {
                format!("its canonical form is:\n  {}", canonical.display())
            })
        })
    }

    /// The last literal segment equals `name`.
    pub fn has_file_name(&self, name: &str) -> Result<&Self, CheckError> {
        self.check("has_file_name", || {
            let actual = lexical::file_name(&self.subject);
            self.ensure(
                actual.as_deref() == Some(name),
                format!("have file name:\n  {}", name),
                || match actual.as_deref() {
                    Some(actual) => format!("its file name is:\n  {}", actual),
                    None => "it has no file name".to_string(),
                },
            )
        })
    }

    /// The file name has extension `extension` (given without the dot).
    pub fn has_extension(&self, extension: &str) -> Result<&Self, CheckError> {
        self.check("has_extension", || {
            let actual = file_extension(&self.subject);
            let wanted = extension.trim_start_matches('.');
            self.ensure(
                actual.as_deref() == Some(wanted),
                format!("have extension:\n  {}", wanted),
                || match actual.as_deref() {
                    Some(actual) => format!("its extension is:\n  {}", actual),
                    None => "it has no extension".to_string(),
                },
            )
        })
    }

    pub fn has_no_extension(&self) -> Result<&Self, CheckError> {
        self.check("has_no_extension", || {
            let actual = file_extension(&self.subject);
            self.ensure(actual.is_none(), "have no extension", || {
                format!("its extension is:\n  {}", actual.unwrap_or_default())
            })
        })
    }

    /// Parent of the normalized subject equals the normalized `expected`, so
    /// `target/dir/..` is accepted as `target`.
    pub fn has_parent(&self, expected: impl AsRef<Path>) -> Result<&Self, CheckError> {
        let expected = expected.as_ref();
        self.check("has_parent", || {
            let actual = lexical::normalized_segments(&self.subject).parent();
            let wanted = lexical::normalized_segments(expected);
            self.ensure(
                actual.as_ref() == Some(&wanted),
                format!("have parent:\n  {}", expected.display()),
                || describe_parent(actual.clone()),
            )
        })
    }

    /// Literal parent of the subject equals the literal `expected`.
    pub fn has_parent_raw(&self, expected: impl AsRef<Path>) -> Result<&Self, CheckError> {
        let expected = expected.as_ref();
        self.check("has_parent_raw", || {
            let actual = lexical::segments(&self.subject).parent();
            let wanted = lexical::segments(expected);
            self.ensure(
                actual.as_ref() == Some(&wanted),
                format!("have parent (raw):\n  {}", expected.display()),
                || describe_parent(actual.clone()),
            )
        })
    }

    pub fn has_no_parent(&self) -> Result<&Self, CheckError> {
        self.check("has_no_parent", || {
            let actual = lexical::normalized_segments(&self.subject).parent();
            self.ensure(actual.is_none(), "have no parent", || {
                describe_parent(actual.clone())
            })
        })
    }

    pub fn has_no_parent_raw(&self) -> Result<&Self, CheckError> {
        self.check("has_no_parent_raw", || {
            let actual = lexical::segments(&self.subject).parent();
            self.ensure(actual.is_none(), "have no parent (raw)", || {
                describe_parent(actual.clone())
            })
        })
    }

    /// Segment prefix after normalizing both paths.
    pub fn starts_with(&self, other: impl AsRef<Path>) -> Result<&Self, CheckError> {
        let other = other.as_ref();
        self.check("starts_with", || {
            let holds = lexical::normalized_segments(&self.subject)
                .starts_with(&lexical::normalized_segments(other));
            self.ensure(
                holds,
                format!("start with:\n  {}", other.display()),
                || "it does not".to_string(),
            )
        })
    }

    /// Literal segment prefix.
    pub fn starts_with_raw(&self, other: impl AsRef<Path>) -> Result<&Self, CheckError> {
        let other = other.as_ref();
        self.check("starts_with_raw", || {
            let holds = lexical::segments(&self.subject).starts_with(&lexical::segments(other));
            self.ensure(
                holds,
                format!("start with (raw):\n  {}", other.display()),
                || "it does not".to_string(),
            )
        })
    }

    /// Segment suffix after normalizing both paths.
    pub fn ends_with(&self, other: impl AsRef<Path>) -> Result<&Self, CheckError> {
        let other = other.as_ref();
        self.check("ends_with", || {
            let holds = lexical::normalized_segments(&self.subject)
                .ends_with(&lexical::normalized_segments(other));
            self.ensure(
                holds,
                format!("end with:\n  {}", other.display()),
                || "it does not".to_string(),
            )
        })
    }

    /// Literal segment suffix.
    pub fn ends_with_raw(&self, other: impl AsRef<Path>) -> Result<&Self, CheckError> {
        let other = other.as_ref();
        self.check("ends_with_raw", || {
            let holds = lexical::segments(&self.subject).ends_with(&lexical::segments(other));
            self.ensure(
                holds,
                format!("end with (raw):\n  {}", other.display()),
                || "it does not".to_string(),
            )
        })
    }
}

fn file_extension(path: &Path) -> Option<String> {
    let name = lexical::file_name(path)?;
    Path::new(&name)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
}
