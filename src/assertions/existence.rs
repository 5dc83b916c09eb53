//! Existence and entry-type checks.

use super::PathAssert;
use crate::error::CheckError;
use crate::probe::{self, EntryKind};

impl PathAssert {
    /// The subject exists, following a final symbolic link. A dangling link fails.
    pub fn exists(&self) -> Result<&Self, CheckError> {
        self.check("exists", || {
            let found = probe::stat(&self.subject, true)?.is_some();
            self.ensure(found, "exist", || {
                "it does not (links followed)".to_string()
            })
        })
    }

    /// The subject exists as an entry of its own; a dangling link passes.
    pub fn exists_no_follow_links(&self) -> Result<&Self, CheckError> {
        self.check("exists_no_follow_links", || {
            let found = probe::stat(&self.subject, false)?.is_some();
            self.ensure(found, "exist (links not followed)", || {
                "it does not".to_string()
            })
        })
    }

    /// Nothing is at the subject path. A link counts as existing even if its target
    /// does not.
    pub fn does_not_exist(&self) -> Result<&Self, CheckError> {
        self.check("does_not_exist", || {
            let kind = probe::entry_kind(&self.subject, false)?;
            self.ensure(kind.is_none(), "not exist", || match kind {
                Some(kind) => format!("it does and is {}", kind),
                None => String::new(),
            })
        })
    }

    pub fn is_regular_file(&self) -> Result<&Self, CheckError> {
        self.check("is_regular_file", || self.require_regular_file().map(|_| ()))
    }

    pub fn is_directory(&self) -> Result<&Self, CheckError> {
        self.check("is_directory", || self.require_directory())
    }

    /// The subject itself is a symbolic link, whatever it points to.
    pub fn is_symbolic_link(&self) -> Result<&Self, CheckError> {
        self.check("is_symbolic_link", || {
            let kind = probe::entry_kind(&self.subject, false)?;
            self.ensure(
                kind == Some(EntryKind::SymbolicLink),
                "be a symbolic link",
                || probe::describe(kind),
            )
        })
    }
}
