//! Path matchers for directory content checks
//!
//! Patterns use a `syntax:pattern` form. `glob:` patterns are translated into an
//! anchored regular expression; `regex:` patterns are used as written and must match
//! the whole path string. Matching is done against the entry path as listed, i.e.
//! the directory joined with the entry name.

use crate::error::EvaluationError;
use regex::Regex;
use std::fmt;
use std::path::Path;

type Predicate = Box<dyn Fn(&Path) -> bool>;

enum Kind {
    Pattern(Regex),
    Predicate(Predicate),
}

/// A compiled matcher over entry paths.
pub struct PathMatcher {
    description: String,
    kind: Kind,
}

impl PathMatcher {
    /// Parse `glob:<pattern>` or `regex:<pattern>`.
    pub fn parse(syntax_and_pattern: &str) -> Result<Self, EvaluationError> {
        let (syntax, pattern) = syntax_and_pattern.split_once(':').ok_or_else(|| {
            EvaluationError::InvalidPattern {
                pattern: syntax_and_pattern.to_string(),
                reason: "expected 'glob:' or 'regex:' prefix".to_string(),
            }
        })?;

        let source = match syntax.to_ascii_lowercase().as_str() {
            "glob" => glob_to_regex(pattern).map_err(|reason| EvaluationError::InvalidPattern {
                pattern: syntax_and_pattern.to_string(),
                reason,
            })?,
            "regex" => pattern.to_string(),
            other => {
                return Err(EvaluationError::InvalidPattern {
                    pattern: syntax_and_pattern.to_string(),
                    reason: format!("unsupported syntax '{}'", other),
                })
            }
        };

        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| {
            EvaluationError::InvalidPattern {
                pattern: syntax_and_pattern.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            description: syntax_and_pattern.to_string(),
            kind: Kind::Pattern(regex),
        })
    }

    /// Wrap a predicate over entry paths.
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + 'static,
    {
        Self {
            description: "the given predicate".to_string(),
            kind: Kind::Predicate(Box::new(predicate)),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match &self.kind {
            Kind::Pattern(regex) => regex.is_match(&path.to_string_lossy()),
            Kind::Predicate(predicate) => predicate(path),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMatcher")
            .field("description", &self.description)
            .finish()
    }
}

const NOT_SEPARATOR: &str = "[^/]";

/// Translate a glob into regex source (unanchored).
fn glob_to_regex(glob: &str) -> Result<String, String> {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::with_capacity(glob.len() * 2);
    let mut in_group = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '\\' => {
                let next = *chars
                    .get(i)
                    .ok_or_else(|| "no character to escape".to_string())?;
                i += 1;
                out.push_str(&regex::escape(&next.to_string()));
            }
            '/' => out.push('/'),
            '*' => {
                if chars.get(i) == Some(&'*') {
                    i += 1;
                    out.push_str(".*");
                } else {
                    out.push_str(NOT_SEPARATOR);
                    out.push('*');
                }
            }
            '?' => out.push_str(NOT_SEPARATOR),
            '[' => {
                out.push_str("[[^/]&&[");
                if chars.get(i) == Some(&'^') {
                    out.push_str("\\^");
                    i += 1;
                } else {
                    if chars.get(i) == Some(&'!') {
                        out.push('^');
                        i += 1;
                    }
                    if chars.get(i) == Some(&'-') {
                        out.push('-');
                        i += 1;
                    }
                }
                let mut closed = false;
                while i < chars.len() {
                    let c = chars[i];
                    i += 1;
                    match c {
                        ']' => {
                            closed = true;
                            break;
                        }
                        '/' => return Err("explicit 'name separator' in class".to_string()),
                        '\\' | '[' | '&' => {
                            out.push('\\');
                            out.push(c);
                        }
                        _ => out.push(c),
                    }
                }
                if !closed {
                    return Err("missing ']'".to_string());
                }
                out.push_str("]]");
            }
            '{' => {
                if in_group {
                    return Err("cannot nest groups".to_string());
                }
                out.push_str("(?:(?:");
                in_group = true;
            }
            '}' if in_group => {
                out.push_str("))");
                in_group = false;
            }
            ',' if in_group => out.push_str(")|(?:"),
            _ => out.push_str(&regex::escape(&c.to_string())),
        }
    }

    if in_group {
        return Err("missing '}'".to_string());
    }
    Ok(out)
}
