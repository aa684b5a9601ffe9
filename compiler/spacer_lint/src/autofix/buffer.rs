//! In-memory line buffer for autofix.

use std::fmt;

use spacer_ir::split_lines;

#[derive(Clone, Debug, Eq, PartialEq)]
struct BufferedLine {
    content: String,
    /// Original terminator (`\n`, `\r\n`, `\r`, or empty on the last line).
    terminator: String,
}

/// The lines of one file, mutable in place.
///
/// Each line keeps its original terminator, so writing an untouched buffer
/// back reproduces the file byte for byte.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineBuffer {
    lines: Vec<BufferedLine>,
}

impl LineBuffer {
    pub fn parse(text: &str) -> Self {
        LineBuffer {
            lines: split_lines(text)
                .map(|(content, terminator)| BufferedLine {
                    content: content.to_string(),
                    terminator: terminator.to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Content of a 1-based line, without its terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        let index = Self::index(line)?;
        self.lines.get(index).map(|l| l.content.as_str())
    }

    pub(super) fn line_mut(&mut self, line: u32) -> Option<&mut String> {
        let index = Self::index(line)?;
        self.lines.get_mut(index).map(|l| &mut l.content)
    }

    fn index(line: u32) -> Option<usize> {
        usize::try_from(line).ok()?.checked_sub(1)
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(&line.content)?;
            f.write_str(&line.terminator)?;
        }
        Ok(())
    }
}
