//! Textual path structure
//!
//! Works on the literal form of a path without touching the filesystem. `std::path`
//! components silently drop interior `.` segments, so raw comparisons split the
//! string form instead.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// A path split into its root (prefix and/or root separator) and its name segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub root: Option<String>,
    pub names: Vec<String>,
}

impl Segments {
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.names.is_empty()
    }

    pub fn to_path_buf(&self) -> PathBuf {
        let mut out = String::new();
        if let Some(ref root) = self.root {
            out.push_str(root);
        }
        out.push_str(&self.names.join(&MAIN_SEPARATOR.to_string()));
        PathBuf::from(out)
    }

    /// Parent segments, `None` when there is nothing left to strip.
    pub fn parent(&self) -> Option<Segments> {
        match self.names.len() {
            0 => None,
            1 if self.root.is_none() => None,
            n => Some(Segments {
                root: self.root.clone(),
                names: self.names[..n - 1].to_vec(),
            }),
        }
    }

    pub fn starts_with(&self, other: &Segments) -> bool {
        if other.is_empty() || self.root != other.root {
            return false;
        }
        self.names.starts_with(&other.names)
    }

    pub fn ends_with(&self, other: &Segments) -> bool {
        if other.is_empty() {
            return false;
        }
        if other.root.is_some() {
            return self == other;
        }
        self.names.ends_with(&other.names)
    }
}

/// Split a path into root and literal name segments. Empty segments (`a//b`) are dropped.
pub fn segments(path: &Path) -> Segments {
    let text = path.to_string_lossy();
    let mut root = String::new();
    let mut root_len = 0;
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                let prefix = prefix.as_os_str().to_string_lossy();
                root_len += prefix.len();
                root.push_str(&prefix);
            }
            Component::RootDir => {
                root_len += 1;
                root.push(MAIN_SEPARATOR);
            }
            _ => break,
        }
    }

    let rest = text.get(root_len..).unwrap_or("");
    let names = rest
        .split(std::path::is_separator)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    Segments {
        root: if root.is_empty() { None } else { Some(root) },
        names,
    }
}

/// Collapse `.` segments and `name/..` pairs. Leading `..` segments of a relative
/// path are kept; `..` directly under a root is dropped.
pub fn normalized_segments(path: &Path) -> Segments {
    let raw = segments(path);
    let mut names: Vec<String> = Vec::with_capacity(raw.names.len());
    for name in raw.names {
        match name.as_str() {
            "." => {}
            ".." => match names.last() {
                Some(last) if last != ".." => {
                    names.pop();
                }
                _ if raw.root.is_some() => {}
                _ => names.push(name),
            },
            _ => names.push(name),
        }
    }
    Segments {
        root: raw.root,
        names,
    }
}

pub fn normalize(path: &Path) -> PathBuf {
    normalized_segments(path).to_path_buf()
}

pub fn is_normalized(path: &Path) -> bool {
    segments(path) == normalized_segments(path)
}

/// Last literal segment, `..` and `.` included.
pub fn file_name(path: &Path) -> Option<String> {
    segments(path).names.last().cloned()
}
