//! Tokens as handed over by the upstream parser.
//!
//! A token carries its literal text and its position: 1-based line,
//! 0-based column counted in Unicode code points. Tokens form a tree; the
//! whitespace rule only looks below the root for type casts, whose closing
//! parenthesis is a direct child.

mod kind;

pub use kind::{TokenKind, UnknownTokenKind};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token with its position in the source and its child tokens.
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column of the first character, in code points.
    pub column: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, line: u32, column: u32, text: impl Into<String>) -> Self {
        Token {
            kind,
            line,
            column,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Attach a child token.
    #[must_use]
    pub fn with_child(mut self, child: Token) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child of the given kind.
    pub fn find_first_child(&self, kind: TokenKind) -> Option<&Token> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Length of the token text in code points.
    ///
    /// Columns are code-point based, so this is the unit to add to a column.
    #[inline]
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {}:{}",
            self.kind, self.text, self.line, self.column
        )?;
        if !self.children.is_empty() {
            f.debug_list().entries(&self.children).finish()?;
        }
        Ok(())
    }
}
