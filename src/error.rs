//! Error types
//!
//! Two kinds of outcome leave a check unsuccessful. An [`AssertionFailure`] means the
//! predicate was evaluated and turned out false. An [`EvaluationError`] means the
//! predicate could not be evaluated at all (unreadable file, unknown algorithm,
//! malformed pattern). Checks return both through [`CheckError`].

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A predicate that evaluated cleanly to false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    pub subject: PathBuf,
    pub expected: String,
    pub actual: String,
    pub detail: Option<String>,
}

impl AssertionFailure {
    pub fn new(subject: &Path, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            subject: subject.to_path_buf(),
            expected: expected.into(),
            actual: actual.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nExpecting path:\n  {}\nto {}\nbut {}",
            self.subject.display(),
            self.expected,
            self.actual
        )?;
        if let Some(ref detail) = self.detail {
            write!(f, "\n{}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailure {}

/// The check itself could not be performed.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid expected digest: {0}")]
    InvalidDigest(String),

    #[error("Invalid path matcher pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Unknown charset: {0}")]
    UnknownCharset(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EvaluationError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        EvaluationError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<config::ConfigError> for EvaluationError {
    fn from(err: config::ConfigError) -> Self {
        EvaluationError::ConfigError(err.to_string())
    }
}

/// Error channel of every check.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Failed(#[from] AssertionFailure),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl CheckError {
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckError::Failed(_))
    }

    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, CheckError::Evaluation(_))
    }

    pub fn failure(&self) -> Option<&AssertionFailure> {
        match self {
            CheckError::Failed(failure) => Some(failure),
            CheckError::Evaluation(_) => None,
        }
    }

    pub fn evaluation_error(&self) -> Option<&EvaluationError> {
        match self {
            CheckError::Failed(_) => None,
            CheckError::Evaluation(err) => Some(err),
        }
    }
}
