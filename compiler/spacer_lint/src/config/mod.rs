//! Rule configuration.
//!
//! The only behavior-relevant setting is the set of token kinds to check.
//! It defaults to every acceptable kind and is usually given as a
//! comma-separated `tokens` property, e.g. `"COMMA, SEMI, TYPECAST"`.

use rustc_hash::FxHashSet;
use spacer_diagnostic::Severity;
use spacer_ir::TokenKind;

use crate::ConfigError;

/// Token kinds this rule can check. Also the default selection.
pub const ACCEPTABLE_TOKENS: [TokenKind; 12] = [
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
];

/// Configuration for the whitespace-after rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhitespaceAfterConfig {
    tokens: FxHashSet<TokenKind>,
    /// Severity of reported diagnostics.
    pub severity: Severity,
}

impl Default for WhitespaceAfterConfig {
    fn default() -> Self {
        WhitespaceAfterConfig {
            tokens: ACCEPTABLE_TOKENS.into_iter().collect(),
            severity: Severity::default(),
        }
    }
}

impl WhitespaceAfterConfig {
    /// Check only the given kinds.
    ///
    /// Fails if a kind is not one of [`ACCEPTABLE_TOKENS`]. An empty
    /// selection falls back to the default.
    pub fn with_tokens(
        kinds: impl IntoIterator<Item = TokenKind>,
    ) -> Result<Self, ConfigError> {
        let mut tokens = FxHashSet::default();
        for kind in kinds {
            if !ACCEPTABLE_TOKENS.contains(&kind) {
                return Err(ConfigError::UnacceptableToken(kind));
            }
            tokens.insert(kind);
        }
        if tokens.is_empty() {
            return Ok(Self::default());
        }
        Ok(WhitespaceAfterConfig {
            tokens,
            severity: Severity::default(),
        })
    }

    /// Parse a comma-separated list of token kind names.
    pub fn from_tokens_property(property: &str) -> Result<Self, ConfigError> {
        let kinds = property
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse::<TokenKind>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_tokens(kinds)
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Whether tokens of this kind are handed to the detector.
    #[inline]
    pub fn is_checked(&self, kind: TokenKind) -> bool {
        self.tokens.contains(&kind)
    }

    /// Checked kinds, in [`ACCEPTABLE_TOKENS`] order.
    pub fn tokens(&self) -> impl Iterator<Item = TokenKind> + '_ {
        ACCEPTABLE_TOKENS
            .into_iter()
            .filter(|kind| self.tokens.contains(kind))
    }
}
