//! Pathspect: Fluent Path Assertions
//!
//! Checks over a filesystem path (existence, kind, lexical structure, content,
//! digests, permissions, directory listings and ordering) that chain fluently and
//! report either an assertion failure or an evaluation error.

pub mod assertions;
pub mod charset;
pub mod config;
pub mod diff;
pub mod digest;
pub mod error;
pub mod lexical;
pub mod logging;
pub mod matcher;
pub mod probe;

pub use assertions::{assert_that, assert_that_with, PathAssert};
pub use charset::Charset;
pub use config::{AssertConfig, ConfigLoader};
pub use digest::{AlgorithmSpec, DigestAlgorithm, ExpectedDigest};
pub use error::{AssertionFailure, CheckError, EvaluationError};
pub use logging::{init_logging, log_failure, LoggingConfig};
pub use matcher::PathMatcher;
