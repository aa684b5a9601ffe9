//! Spacer IR - token and source types
//!
//! This crate holds the read-only inputs of the whitespace rule:
//! - Tokens with kind, 1-based line, 0-based code-point column and text
//! - Token trees (a type cast owns its closing parenthesis as a child)
//! - Line lookup by 1-based line number, yielding Unicode code points
//!
//! Nothing here tokenizes or parses. Trees come from an external parser,
//! usually as a serde dump.

mod source;
mod token;

pub use source::{split_lines, LineSource, SourceLines};
pub use token::{Token, TokenKind, UnknownTokenKind};
