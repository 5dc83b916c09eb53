//! Difference reports for content failures.

/// A single differing line between expected and actual text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDelta {
    Changed {
        line: usize,
        expected: String,
        actual: String,
    },
    Missing {
        line: usize,
        expected: String,
    },
    Extra {
        line: usize,
        actual: String,
    },
}

/// Compare two texts line by line. Line terminators are kept on each line so a
/// difference in `\n` versus `\r\n`, or a missing trailing newline, is reported.
pub fn line_deltas(expected: &str, actual: &str) -> Vec<LineDelta> {
    let expected_lines: Vec<&str> = expected.split_inclusive('\n').collect();
    let actual_lines: Vec<&str> = actual.split_inclusive('\n').collect();
    let longest = expected_lines.len().max(actual_lines.len());

    let mut deltas = Vec::new();
    for index in 0..longest {
        let line = index + 1;
        match (expected_lines.get(index), actual_lines.get(index)) {
            (Some(e), Some(a)) if e != a => deltas.push(LineDelta::Changed {
                line,
                expected: e.to_string(),
                actual: a.to_string(),
            }),
            (Some(e), None) => deltas.push(LineDelta::Missing {
                line,
                expected: e.to_string(),
            }),
            (None, Some(a)) => deltas.push(LineDelta::Extra {
                line,
                actual: a.to_string(),
            }),
            _ => {}
        }
    }
    deltas
}

/// Render deltas as the detail block of a failure message.
pub fn format_line_deltas(deltas: &[LineDelta]) -> String {
    let mut out = String::from("Differences:");
    for delta in deltas {
        match delta {
            LineDelta::Changed {
                line,
                expected,
                actual,
            } => out.push_str(&format!(
                "\n  line {}:\n    expected: {:?}\n    actual:   {:?}",
                line, expected, actual
            )),
            LineDelta::Missing { line, expected } => out.push_str(&format!(
                "\n  line {}: missing\n    expected: {:?}",
                line, expected
            )),
            LineDelta::Extra { line, actual } => out.push_str(&format!(
                "\n  line {}: unexpected\n    actual:   {:?}",
                line, actual
            )),
        }
    }
    out
}

/// First byte where two buffers disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteMismatch {
    pub offset: usize,
    pub expected: Option<u8>,
    pub actual: Option<u8>,
}

pub fn first_byte_mismatch(expected: &[u8], actual: &[u8]) -> Option<ByteMismatch> {
    let offset = expected
        .iter()
        .zip(actual.iter())
        .position(|(e, a)| e != a)
        .or_else(|| {
            if expected.len() != actual.len() {
                Some(expected.len().min(actual.len()))
            } else {
                None
            }
        })?;
    Some(ByteMismatch {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
    })
}

pub fn format_byte_mismatch(mismatch: &ByteMismatch) -> String {
    let show = |b: Option<u8>| match b {
        Some(b) => format!("0x{:02X}", b),
        None => "EOF".to_string(),
    };
    format!(
        "at byte offset {} expected {} but was {}",
        mismatch.offset,
        show(mismatch.expected),
        show(mismatch.actual)
    )
}
