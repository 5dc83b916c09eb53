//! Filesystem probes
//!
//! Thin synchronous wrappers over the platform filesystem. A missing entry is a
//! normal answer (`None` / `false`); every other I/O failure becomes an
//! [`EvaluationError`]. Nothing is cached between calls.

use crate::error::EvaluationError;
use std::fmt;
use std::fs::{self, Metadata};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile,
    Directory,
    SymbolicLink,
    Other,
}

impl EntryKind {
    pub fn of(metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            EntryKind::SymbolicLink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::RegularFile
        } else {
            EntryKind::Other
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::RegularFile => "a regular file",
            EntryKind::Directory => "a directory",
            EntryKind::SymbolicLink => "a symbolic link",
            EntryKind::Other => "a special file",
        };
        f.write_str(name)
    }
}

/// Stat a path, optionally following a final symbolic link.
pub fn stat(path: &Path, follow_links: bool) -> Result<Option<Metadata>, EvaluationError> {
    let result = if follow_links {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };
    match result {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if is_missing(&e) => Ok(None),
        // A link cycle never resolves to an entry.
        Err(e) if follow_links && is_link_loop(&e) => Ok(None),
        Err(e) => Err(EvaluationError::io(path, e)),
    }
}

pub fn entry_kind(path: &Path, follow_links: bool) -> Result<Option<EntryKind>, EvaluationError> {
    Ok(stat(path, follow_links)?.as_ref().map(EntryKind::of))
}

/// Human description of an entry kind, for failure messages.
pub fn describe(kind: Option<EntryKind>) -> String {
    match kind {
        Some(kind) => format!("it is {}", kind),
        None => "it does not exist".to_string(),
    }
}

fn is_missing(e: &io::Error) -> bool {
    e.kind() == ErrorKind::NotFound || is_not_a_directory(e)
}

// ENOTDIR shows up when a path component is a regular file.
#[cfg(unix)]
fn is_not_a_directory(e: &io::Error) -> bool {
    e.raw_os_error() == Some(nix::libc::ENOTDIR)
}

#[cfg(not(unix))]
fn is_not_a_directory(_e: &io::Error) -> bool {
    false
}

#[cfg(unix)]
fn is_link_loop(e: &io::Error) -> bool {
    e.raw_os_error() == Some(nix::libc::ELOOP)
}

#[cfg(not(unix))]
fn is_link_loop(_e: &io::Error) -> bool {
    false
}

/// Read the full content snapshot.
pub fn read_content(path: &Path) -> Result<Vec<u8>, EvaluationError> {
    fs::read(path).map_err(|e| EvaluationError::io(path, e))
}

/// Direct children of a directory, sorted by name. Each entry is `dir.join(name)`.
pub fn list_dir(path: &Path) -> Result<Vec<PathBuf>, EvaluationError> {
    collect_entries(WalkDir::new(path).min_depth(1).max_depth(1), path)
}

/// All descendants of a directory, depth-first, sorted by name within a directory.
pub fn walk_dir(path: &Path) -> Result<Vec<PathBuf>, EvaluationError> {
    collect_entries(WalkDir::new(path).min_depth(1), path)
}

fn collect_entries(walker: WalkDir, root: &Path) -> Result<Vec<PathBuf>, EvaluationError> {
    let mut entries = Vec::new();
    for entry in walker.sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let failed = e.path().unwrap_or(root).to_path_buf();
            EvaluationError::io(&failed, io::Error::from(e))
        })?;
        entries.push(entry.into_path());
    }
    Ok(entries)
}

/// Permissions of the calling user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Read,
    Write,
    Execute,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Permission::Read => "readable",
            Permission::Write => "writable",
            Permission::Execute => "executable",
        };
        f.write_str(name)
    }
}

/// Whether the calling user holds `permission` on the path, after link resolution.
///
/// Checked against the effective uid and gid where the platform offers
/// `eaccess`, otherwise against the real ids through `access(2)`.
#[cfg(unix)]
pub fn has_permission(path: &Path, permission: Permission) -> Result<bool, EvaluationError> {
    use nix::errno::Errno;
    use nix::unistd::AccessFlags;
    #[cfg(any(
        target_os = "freebsd",
        target_os = "dragonfly",
        all(target_os = "linux", not(target_env = "uclibc"))
    ))]
    use nix::unistd::eaccess as access;
    #[cfg(not(any(
        target_os = "freebsd",
        target_os = "dragonfly",
        all(target_os = "linux", not(target_env = "uclibc"))
    )))]
    use nix::unistd::access;

    let mode = match permission {
        Permission::Read => AccessFlags::R_OK,
        Permission::Write => AccessFlags::W_OK,
        Permission::Execute => AccessFlags::X_OK,
    };
    match access(path, mode) {
        Ok(()) => Ok(true),
        Err(Errno::EACCES) | Err(Errno::EROFS) | Err(Errno::ETXTBSY) => Ok(false),
        Err(Errno::ENOENT) | Err(Errno::ENOTDIR) | Err(Errno::ELOOP) => Ok(false),
        Err(errno) => Err(EvaluationError::io(path, io::Error::from(errno))),
    }
}

#[cfg(not(unix))]
pub fn has_permission(path: &Path, permission: Permission) -> Result<bool, EvaluationError> {
    let metadata = match stat(path, true)? {
        Some(metadata) => metadata,
        None => return Ok(false),
    };
    Ok(match permission {
        Permission::Read => {
            if metadata.is_dir() {
                fs::read_dir(path).is_ok()
            } else {
                fs::File::open(path).is_ok()
            }
        }
        Permission::Write => !metadata.permissions().readonly(),
        Permission::Execute => {
            metadata.is_dir()
                || path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| {
                        ["exe", "bat", "cmd", "com"]
                            .iter()
                            .any(|x| e.eq_ignore_ascii_case(x))
                    })
                    .unwrap_or(false)
        }
    })
}
