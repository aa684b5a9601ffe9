//! Violation records.
//!
//! A violation pins a token that lacks trailing whitespace. Violations sort
//! by `(line, column)`, which is also the order the autofixer needs within
//! a line.

use std::fmt;

use spacer_diagnostic::{Diagnostic, ErrorCode, Severity};

/// Message key for the generic case, parameterized by token text.
pub const MSG_WS_NOT_FOLLOWED: &str = "ws.notFollowed";

/// Message key for the type cast case; the message is fixed.
pub const MSG_WS_TYPECAST: &str = "ws.typeCast";

/// What was not followed by whitespace.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ViolationKind {
    /// A checked token; carries its literal text.
    NotFollowedByWhitespace { text: String },
    /// The closing parenthesis of a type cast.
    TypecastNotFollowed,
}

/// A token not followed by whitespace.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Violation {
    /// 1-based line.
    pub line: u32,
    /// 0-based column of the offending token, in code points.
    pub column: u32,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn not_followed(line: u32, column: u32, text: impl Into<String>) -> Self {
        Violation {
            line,
            column,
            kind: ViolationKind::NotFollowedByWhitespace { text: text.into() },
        }
    }

    pub fn typecast(line: u32, column: u32) -> Self {
        Violation {
            line,
            column,
            kind: ViolationKind::TypecastNotFollowed,
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self.kind {
            ViolationKind::NotFollowedByWhitespace { .. } => MSG_WS_NOT_FOLLOWED,
            ViolationKind::TypecastNotFollowed => MSG_WS_TYPECAST,
        }
    }

    /// The message argument, if the kind carries one.
    pub fn text_arg(&self) -> Option<&str> {
        match &self.kind {
            ViolationKind::NotFollowedByWhitespace { text } => Some(text.as_str()),
            ViolationKind::TypecastNotFollowed => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ViolationKind::NotFollowedByWhitespace { .. } => ErrorCode::W1001,
            ViolationKind::TypecastNotFollowed => ErrorCode::W1002,
        }
    }

    pub fn message(&self) -> String {
        let subject = self.text_arg().unwrap_or("typecast");
        format!("'{subject}' is not followed by whitespace.")
    }

    /// Width, in code points, of the token the space goes after.
    ///
    /// The token text for the generic case; the one-character closing
    /// parenthesis for a type cast.
    pub fn fix_width(&self) -> usize {
        self.text_arg().map_or(1, |text| text.chars().count())
    }

    pub fn to_diagnostic(&self, severity: Severity) -> Diagnostic {
        Diagnostic::new(self.code(), severity)
            .with_message(self.message())
            .at(self.line, self.column)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message())
    }
}
