//! Source line lookup.
//!
//! The whitespace rule inspects exactly one character per token, on the
//! token's own line. Lines are served as Unicode code points so that
//! token columns (also code points) index them directly.

/// Random access to source lines as code points.
pub trait LineSource {
    /// Code points of a 1-based line, without its terminator.
    ///
    /// Returns `None` when the line does not exist.
    fn line_code_points(&self, line: u32) -> Option<&[char]>;
}

/// Owned line table built from source text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourceLines {
    lines: Vec<Vec<char>>,
}

impl SourceLines {
    pub fn new(text: &str) -> Self {
        SourceLines {
            lines: split_lines(text)
                .map(|(content, _)| content.chars().collect())
                .collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSource for SourceLines {
    fn line_code_points(&self, line: u32) -> Option<&[char]> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.lines.get(index).map(Vec::as_slice)
    }
}

/// Split text into `(content, terminator)` pairs.
///
/// Recognizes `\n`, `\r\n` and a lone `\r`. The last line has an empty
/// terminator when the text does not end with one; text ending in a
/// terminator does not produce a trailing empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['\n', '\r']) else {
            let line = rest;
            rest = "";
            return Some((line, ""));
        };
        let term_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        let (content, tail) = rest.split_at(pos);
        let (terminator, next) = tail.split_at(term_len);
        rest = next;
        Some((content, terminator))
    })
}
