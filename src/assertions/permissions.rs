use super::PathAssert;
use crate::error::CheckError;
use crate::probe::{self, Permission};

impl PathAssert {
    /// The calling user may read the subject. Symbolic links are followed.
    pub fn is_readable(&self) -> Result<&Self, CheckError> {
        self.check("is_readable", || self.permitted(Permission::Read))
    }

    pub fn is_writable(&self) -> Result<&Self, CheckError> {
        self.check("is_writable", || self.permitted(Permission::Write))
    }

    pub fn is_executable(&self) -> Result<&Self, CheckError> {
        self.check("is_executable", || self.permitted(Permission::Execute))
    }

    fn permitted(&self, permission: Permission) -> Result<(), CheckError> {
        let expected = format!("be {}", permission);
        if probe::stat(&self.subject, true)?.is_none() {
            return Err(self.failure(expected, "it does not exist").into());
        }
        let granted = probe::has_permission(&self.subject, permission)?;
        self.ensure(granted, expected, || format!("it is not {}", permission))
    }
}
