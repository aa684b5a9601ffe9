//! Error types for detection, configuration and autofix.

use std::io;
use std::path::PathBuf;

use spacer_ir::{TokenKind, UnknownTokenKind};

/// The token tree broke the contract the rule relies on.
///
/// These are not lint outcomes: they mean the upstream parser handed over
/// something malformed, and the run for that file is abandoned.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LintError {
    #[error("malformed token tree: typecast at {line}:{column} has no closing parenthesis")]
    MalformedTypecast { line: u32, column: u32 },

    #[error("token `{text}` refers to line {line}, which is not in the source")]
    LineOutOfRange { line: u32, text: String },
}

/// Invalid rule configuration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownToken(#[from] UnknownTokenKind),

    #[error("token kind `{0}` cannot be checked by this rule")]
    UnacceptableToken(TokenKind),
}

/// Autofix failed for a file; nothing was written.
#[derive(Debug, thiserror::Error)]
pub enum AutofixError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("violation on line {line}, but the file has {len} lines")]
    LineOutOfRange { line: u32, len: usize },

    #[error("cannot insert at column {index} of line {line}: line is {len} characters long")]
    ColumnOutOfRange { line: u32, index: usize, len: usize },
}
