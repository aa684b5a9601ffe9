//! Codes for all diagnostics the rule can report.
//!
//! Format: W#### for style warnings. Used for `explain` lookups.

use std::fmt;
use std::str::FromStr;

/// Diagnostic codes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorCode {
    /// Token not followed by whitespace
    W1001,
    /// Type cast not followed by whitespace
    W1002,
}

impl ErrorCode {
    /// All code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[ErrorCode::W1001, ErrorCode::W1002];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W1001 => "W1001",
            ErrorCode::W1002 => "W1002",
        }
    }

    /// Short human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::W1001 => "token not followed by whitespace",
            ErrorCode::W1002 => "type cast not followed by whitespace",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a code that does not exist.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown diagnostic code `{0}`")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
