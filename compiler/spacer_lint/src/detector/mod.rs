//! The whitespace-after detector.
//!
//! For each checked token the rule resolves one position-bearing token,
//! then looks at the single code point right after it on the same line:
//!
//! - nothing there (end of line): fine
//! - breaking whitespace, `;` or `)`: fine
//! - anything else: violation
//!
//! Type casts are the one kind that resolve to a different token: their
//! closing parenthesis. Every other kind is checked at its own position.

use std::collections::BTreeSet;

use spacer_diagnostic::Diagnostic;
use spacer_ir::{LineSource, Token, TokenKind};

use crate::{LintError, Violation, WhitespaceAfterConfig};

/// Whether the code point at `after` counts as "followed by whitespace".
///
/// `after` is the index one past the token's last code point. An index at
/// or past the end of the line is accepted.
#[inline]
pub fn is_followed_by_whitespace(after: usize, line: &[char]) -> bool {
    match line.get(after) {
        None => true,
        Some(&c) => c == ';' || c == ')' || is_breaking_whitespace(c),
    }
}

/// Whitespace that may separate two tokens.
///
/// Unicode space and line separators minus the no-break spaces and NEL,
/// plus the ASCII controls `\t`..`\r` and the information separators
/// U+001C..U+001F.
#[inline]
pub fn is_breaking_whitespace(c: char) -> bool {
    matches!(c, '\t'..='\r' | '\u{1C}'..='\u{1F}')
        || (c.is_whitespace() && !matches!(c, '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}'))
}

/// The token whose end is inspected.
#[derive(Copy, Clone, Debug)]
enum Target<'a> {
    /// The checked token itself.
    Token(&'a Token),
    /// The closing parenthesis of a type cast.
    CastParen(&'a Token),
}

impl<'a> Target<'a> {
    fn resolve(token: &'a Token) -> Result<Self, LintError> {
        if token.kind != TokenKind::Typecast {
            return Ok(Target::Token(token));
        }
        token
            .find_first_child(TokenKind::RParen)
            .map(Target::CastParen)
            .ok_or(LintError::MalformedTypecast {
                line: token.line,
                column: token.column,
            })
    }

    fn token(self) -> &'a Token {
        match self {
            Target::Token(token) | Target::CastParen(token) => token,
        }
    }

    fn violation(self) -> Violation {
        match self {
            Target::Token(token) => {
                Violation::not_followed(token.line, token.column, token.text.as_str())
            }
            Target::CastParen(paren) => Violation::typecast(paren.line, paren.column),
        }
    }
}

/// Checks that configured tokens are followed by whitespace.
///
/// Holds only configuration; every check is a pure function of the token
/// and its source line, so one instance serves any number of files.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceAfter {
    config: WhitespaceAfterConfig,
}

impl WhitespaceAfter {
    pub fn new(config: WhitespaceAfterConfig) -> Self {
        WhitespaceAfter { config }
    }

    pub fn config(&self) -> &WhitespaceAfterConfig {
        &self.config
    }

    /// Check a single token.
    ///
    /// Does not consult the configured token set; the caller decides which
    /// tokens to hand in (see [`check_tree`](Self::check_tree)).
    pub fn check(
        &self,
        token: &Token,
        source: &impl LineSource,
    ) -> Result<Option<Violation>, LintError> {
        let target = Target::resolve(token)?;
        let at = target.token();
        let line = source
            .line_code_points(at.line)
            .ok_or_else(|| LintError::LineOutOfRange {
                line: at.line,
                text: at.text.clone(),
            })?;

        let after = at.column as usize + at.text_len();
        if is_followed_by_whitespace(after, line) {
            return Ok(None);
        }

        let violation = target.violation();
        tracing::debug!(
            line = violation.line,
            column = violation.column,
            key = violation.message_key(),
            "not followed by whitespace"
        );
        Ok(Some(violation))
    }

    /// Walk token trees depth-first and check every configured token.
    ///
    /// Stops at the first malformed token; violations found so far are
    /// dropped with it.
    #[tracing::instrument(level = "debug", skip_all, fields(roots = roots.len()))]
    pub fn check_tree(
        &self,
        roots: &[Token],
        source: &impl LineSource,
    ) -> Result<BTreeSet<Violation>, LintError> {
        let mut violations = BTreeSet::new();
        let mut stack: Vec<&Token> = roots.iter().rev().collect();

        while let Some(token) = stack.pop() {
            tracing::trace!(
                kind = %token.kind,
                line = token.line,
                column = token.column,
                "visit"
            );
            if self.config.is_checked(token.kind) {
                if let Some(violation) = self.check(token, source)? {
                    violations.insert(violation);
                }
            }
            stack.extend(token.children.iter().rev());
        }

        tracing::debug!(count = violations.len(), "check finished");
        Ok(violations)
    }

    /// Render violations at the configured severity.
    pub fn diagnostics<'a>(
        &self,
        violations: impl IntoIterator<Item = &'a Violation>,
    ) -> Vec<Diagnostic> {
        violations
            .into_iter()
            .map(|violation| violation.to_diagnostic(self.config.severity))
            .collect()
    }
}
