//! Directory listing checks.
//!
//! Entries are passed to matchers as `directory.join(name)`, so glob and regex
//! patterns see the subject path as a prefix.

use super::PathAssert;
use crate::error::CheckError;
use crate::matcher::PathMatcher;
use crate::probe;
use std::path::{Path, PathBuf};

const PREDICATE: &str = "the given predicate";

#[derive(Clone, Copy)]
enum Depth {
    Direct,
    Recursive,
}

impl PathAssert {
    /// Directory with at least one direct entry matching a `glob:` or `regex:` pattern.
    pub fn is_directory_containing(&self, pattern: &str) -> Result<&Self, CheckError> {
        let matcher = PathMatcher::parse(pattern);
        self.check("is_directory_containing", || {
            let matcher = matcher?;
            self.containing(Depth::Direct, matcher.description(), |p| matcher.matches(p))
        })
    }

    /// Directory with at least one direct entry accepted by `predicate`.
    pub fn is_directory_containing_where<F>(&self, predicate: F) -> Result<&Self, CheckError>
    where
        F: Fn(&Path) -> bool,
    {
        self.check("is_directory_containing", || {
            self.containing(Depth::Direct, PREDICATE, predicate)
        })
    }

    pub fn is_directory_containing_matcher(
        &self,
        matcher: &PathMatcher,
    ) -> Result<&Self, CheckError> {
        self.check("is_directory_containing", || {
            self.containing(Depth::Direct, matcher.description(), |p| matcher.matches(p))
        })
    }

    /// Directory with no direct entry matching a `glob:` or `regex:` pattern.
    pub fn is_directory_not_containing(&self, pattern: &str) -> Result<&Self, CheckError> {
        let matcher = PathMatcher::parse(pattern);
        self.check("is_directory_not_containing", || {
            let matcher = matcher?;
            self.not_containing(matcher.description(), |p| matcher.matches(p))
        })
    }

    pub fn is_directory_not_containing_where<F>(&self, predicate: F) -> Result<&Self, CheckError>
    where
        F: Fn(&Path) -> bool,
    {
        self.check("is_directory_not_containing", || {
            self.not_containing(PREDICATE, predicate)
        })
    }

    pub fn is_directory_not_containing_matcher(
        &self,
        matcher: &PathMatcher,
    ) -> Result<&Self, CheckError> {
        self.check("is_directory_not_containing", || {
            self.not_containing(matcher.description(), |p| matcher.matches(p))
        })
    }

    /// Directory with a matching entry anywhere below it.
    pub fn is_directory_recursively_containing(
        &self,
        pattern: &str,
    ) -> Result<&Self, CheckError> {
        let matcher = PathMatcher::parse(pattern);
        self.check("is_directory_recursively_containing", || {
            let matcher = matcher?;
            self.containing(Depth::Recursive, matcher.description(), |p| {
                matcher.matches(p)
            })
        })
    }

    pub fn is_directory_recursively_containing_where<F>(
        &self,
        predicate: F,
    ) -> Result<&Self, CheckError>
    where
        F: Fn(&Path) -> bool,
    {
        self.check("is_directory_recursively_containing", || {
            self.containing(Depth::Recursive, PREDICATE, predicate)
        })
    }

    pub fn is_empty_directory(&self) -> Result<&Self, CheckError> {
        self.check("is_empty_directory", || {
            let entries = self.entries(Depth::Direct)?;
            if entries.is_empty() {
                return Ok(());
            }
            let listed: Vec<&Path> = entries.iter().map(PathBuf::as_path).collect();
            Err(self
                .failure(
                    "be an empty directory",
                    format!("it contains {} entries", entries.len()),
                )
                .with_detail(self.format_entries(&listed))
                .into())
        })
    }

    pub fn is_not_empty_directory(&self) -> Result<&Self, CheckError> {
        self.check("is_not_empty_directory", || {
            let entries = self.entries(Depth::Direct)?;
            self.ensure(!entries.is_empty(), "not be an empty directory", || {
                "it is empty".to_string()
            })
        })
    }

    fn entries(&self, depth: Depth) -> Result<Vec<PathBuf>, CheckError> {
        self.require_directory()?;
        let entries = match depth {
            Depth::Direct => probe::list_dir(&self.subject)?,
            Depth::Recursive => probe::walk_dir(&self.subject)?,
        };
        Ok(entries)
    }

    fn containing<F>(&self, depth: Depth, description: &str, predicate: F) -> Result<(), CheckError>
    where
        F: Fn(&Path) -> bool,
    {
        let entries = self.entries(depth)?;
        if entries.iter().any(|entry| predicate(entry.as_path())) {
            return Ok(());
        }
        let scope = match depth {
            Depth::Direct => "containing",
            Depth::Recursive => "recursively containing",
        };
        let listed: Vec<&Path> = entries.iter().map(PathBuf::as_path).collect();
        Err(self
            .failure(
                format!("be a directory {} at least one entry matching {}", scope, description),
                "no entry matches",
            )
            .with_detail(self.format_entries(&listed))
            .into())
    }

    fn not_containing<F>(&self, description: &str, predicate: F) -> Result<(), CheckError>
    where
        F: Fn(&Path) -> bool,
    {
        let entries = self.entries(Depth::Direct)?;
        let matching: Vec<&Path> = entries
            .iter()
            .map(PathBuf::as_path)
            .filter(|entry| predicate(*entry))
            .collect();
        if matching.is_empty() {
            return Ok(());
        }
        Err(self
            .failure(
                format!("be a directory containing no entry matching {}", description),
                format!("{} entries match", matching.len()),
            )
            .with_detail(self.format_entries(&matching))
            .into())
    }
}
