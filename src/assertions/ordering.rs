//! Ordering of the subject against another path. Paths compare by their raw
//! byte representation, without touching the filesystem.

use super::PathAssert;
use crate::error::CheckError;
use std::cmp::Ordering;
use std::path::Path;

impl PathAssert {
    pub fn is_less_than(&self, other: impl AsRef<Path>) -> Result<&Self, CheckError> {
        self.compare("is_less_than", other.as_ref(), "be less than", |o| {
            o == Ordering::Less
        })
    }

    pub fn is_less_than_or_equal_to(&self, other: impl AsRef<Path>) -> Result<&Self, CheckError> {
        self.compare(
            "is_less_than_or_equal_to",
            other.as_ref(),
            "be less than or equal to",
            |o| o != Ordering::Greater,
        )
    }

    pub fn is_greater_than(&self, other: impl AsRef<Path>) -> Result<&Self, CheckError> {
        self.compare("is_greater_than", other.as_ref(), "be greater than", |o| {
            o == Ordering::Greater
        })
    }

    pub fn is_greater_than_or_equal_to(
        &self,
        other: impl AsRef<Path>,
    ) -> Result<&Self, CheckError> {
        self.compare(
            "is_greater_than_or_equal_to",
            other.as_ref(),
            "be greater than or equal to",
            |o| o != Ordering::Less,
        )
    }

    fn compare(
        &self,
        name: &'static str,
        other: &Path,
        relation: &str,
        accept: impl FnOnce(Ordering) -> bool,
    ) -> Result<&Self, CheckError> {
        self.check(name, || {
            let ordering = self.subject.as_os_str().cmp(other.as_os_str());
            self.ensure(
                accept(ordering),
                format!("{}:\n  {}", relation, other.display()),
                || {
                    let word = match ordering {
                        Ordering::Less => "less than",
                        Ordering::Equal => "equal to",
                        Ordering::Greater => "greater than",
                    };
                    format!("it is {} it", word)
                },
            )
        })
    }
}
