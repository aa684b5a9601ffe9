//! Token kind enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Token kinds produced by the upstream parser.
///
/// Only the kinds the whitespace rule can check are listed, plus the
/// structural kinds that appear inside a type cast subtree.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// Type cast expression `(T) expr`; owns an `RParen` child.
    Typecast,
    LiteralIf,
    LiteralElse,
    LiteralWhile,
    LiteralDo,
    LiteralFor,
    /// The `while` that closes a `do { } while (..)` loop.
    DoWhile,
    /// Variadic parameter marker `...`
    Ellipsis,
    LiteralSwitch,
    /// Lambda arrow `->`
    Lambda,

    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,
    Ident,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 15] = [
        TokenKind::Comma,
        TokenKind::Semi,
        TokenKind::Typecast,
        TokenKind::LiteralIf,
        TokenKind::LiteralElse,
        TokenKind::LiteralWhile,
        TokenKind::LiteralDo,
        TokenKind::LiteralFor,
        TokenKind::DoWhile,
        TokenKind::Ellipsis,
        TokenKind::LiteralSwitch,
        TokenKind::Lambda,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Ident,
    ];

    /// Canonical upper-case name, as used in rule configuration and dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Comma => "COMMA",
            TokenKind::Semi => "SEMI",
            TokenKind::Typecast => "TYPECAST",
            TokenKind::LiteralIf => "LITERAL_IF",
            TokenKind::LiteralElse => "LITERAL_ELSE",
            TokenKind::LiteralWhile => "LITERAL_WHILE",
            TokenKind::LiteralDo => "LITERAL_DO",
            TokenKind::LiteralFor => "LITERAL_FOR",
            TokenKind::DoWhile => "DO_WHILE",
            TokenKind::Ellipsis => "ELLIPSIS",
            TokenKind::LiteralSwitch => "LITERAL_SWITCH",
            TokenKind::Lambda => "LAMBDA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Ident => "IDENT",
        }
    }

    /// Look up a kind by its canonical name.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing a token kind name that does not exist.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown token kind `{0}`")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::from_name(s).ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}
