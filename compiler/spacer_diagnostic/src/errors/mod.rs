//! Embedded documentation for `explain` support.
//!
//! Each code has a markdown file in this directory, embedded at compile
//! time.

use crate::ErrorCode;

/// Registry of embedded diagnostic documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for a code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::W1001, include_str!("W1001.md")),
    (ErrorCode::W1002, include_str!("W1002.md")),
];
