//! Autofix: insert the missing spaces.
//!
//! Violation columns are measured against the original line. Every space
//! inserted on a line pushes everything to its right by one, so within a
//! line violations are applied left to right with a running `shift` equal
//! to the number of spaces already inserted there:
//!
//! ```text
//! a,b;c     comma @1, semi @3
//! a, b;c    insert at 1 + 1 + 0 = 2
//! a, b; c   insert at 3 + 1 + 1 = 5
//! ```
//!
//! Lines are independent; the shift resets for each one.

mod buffer;

pub use buffer::LineBuffer;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::{AutofixError, Violation};

/// Outcome of an autofix pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FixSummary {
    /// Spaces inserted.
    pub insertions: usize,
    /// Distinct lines changed.
    pub lines: usize,
}

/// Insert one space before the code point at `char_index`.
///
/// `char_index` may equal the line length (append). Returns `false` and
/// leaves the line untouched if it is past the end.
pub fn insert_space_at(line: &mut String, char_index: usize) -> bool {
    let byte_index = match line.char_indices().nth(char_index) {
        Some((byte, _)) => byte,
        None if char_index == line.chars().count() => line.len(),
        None => return false,
    };
    line.insert(byte_index, ' ');
    true
}

/// Apply every violation to the buffer.
///
/// On error the buffer may already hold some of the insertions; callers
/// that persist the buffer must discard it.
pub fn apply_fixes(
    buffer: &mut LineBuffer,
    violations: &BTreeSet<Violation>,
) -> Result<FixSummary, AutofixError> {
    // The set is ordered by (line, column), so each group is left to right.
    let mut by_line: BTreeMap<u32, Vec<&Violation>> = BTreeMap::new();
    for violation in violations {
        by_line.entry(violation.line).or_default().push(violation);
    }

    let mut summary = FixSummary::default();
    let len = buffer.len();
    for (line, group) in by_line {
        let content = buffer
            .line_mut(line)
            .ok_or(AutofixError::LineOutOfRange { line, len })?;

        let mut shift = 0;
        for violation in group {
            let index = violation.column as usize + violation.fix_width() + shift;
            if !insert_space_at(content, index) {
                return Err(AutofixError::ColumnOutOfRange {
                    line,
                    index,
                    len: content.chars().count(),
                });
            }
            shift += 1;
        }

        tracing::trace!(line, insertions = shift, "line fixed");
        summary.insertions += shift;
        summary.lines += 1;
    }

    Ok(summary)
}

/// Fix source text in memory.
pub fn fix_source(
    text: &str,
    violations: &BTreeSet<Violation>,
) -> Result<String, AutofixError> {
    let mut buffer = LineBuffer::parse(text);
    apply_fixes(&mut buffer, violations)?;
    Ok(buffer.to_string())
}

/// Fix a file in place.
///
/// Reads the file once, applies all fixes in memory, and writes the whole
/// buffer back once, even when there was nothing to fix. Nothing is written
/// if reading or fixing fails.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(path = %path.display(), violations = violations.len())
)]
pub fn autofix_file(
    path: &Path,
    violations: &BTreeSet<Violation>,
) -> Result<FixSummary, AutofixError> {
    let text = fs::read_to_string(path).map_err(|source| AutofixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buffer = LineBuffer::parse(&text);
    let summary = apply_fixes(&mut buffer, violations)?;

    fs::write(path, buffer.to_string()).map_err(|source| AutofixError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        insertions = summary.insertions,
        lines = summary.lines,
        "autofix written"
    );
    Ok(summary)
}
